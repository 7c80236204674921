//! Tests for session state
//!
//! These tests verify:
//! - A failed compute keeps the previous summary
//! - Dataset mutations mark the summary stale
//! - A failed append leaves dataset and summary untouched

use super::{assert_close, input, reference_records};
use crate::dataset::Dataset;
use crate::error::DecisionError;
use crate::session::Session;

#[test]
fn test_compute_on_empty_session() {
    let mut session = Session::new();
    assert_eq!(session.compute().unwrap_err(), DecisionError::EmptyDataset);
    assert!(session.last_ev().is_none());
    assert!(!session.is_ev_stale());
}

#[test]
fn test_failed_compute_keeps_previous_summary() {
    let mut session = Session::with_dataset(Dataset::from_records(reference_records()));
    let computed = session.compute().unwrap().clone();

    while !session.dataset().is_empty() {
        session.remove_at(0).unwrap();
    }

    assert_eq!(session.compute().unwrap_err(), DecisionError::EmptyDataset);
    assert_eq!(session.last_ev(), Some(&computed));
    assert!(session.is_ev_stale());
}

#[test]
fn test_mutation_marks_summary_stale() {
    let mut session = Session::with_dataset(Dataset::from_records(reference_records()));
    session.compute().unwrap();
    assert!(!session.is_ev_stale());

    session.append(&input("B", "1.0", "0", "1.000")).unwrap();
    assert!(session.is_ev_stale());

    let summary = session.compute().unwrap();
    assert_close(summary.ev.get("B").unwrap(), 1_000.0);
    assert!(!session.is_ev_stale());
}

#[test]
fn test_failed_append_changes_nothing() {
    let mut session = Session::with_dataset(Dataset::from_records(reference_records()));
    session.compute().unwrap();

    let err = session.append(&input("C", "0.5", "abc", "100")).unwrap_err();
    assert!(matches!(err, DecisionError::InvalidInput { .. }));
    assert_eq!(session.dataset().len(), 3);
    assert!(!session.is_ev_stale());
}

#[test]
fn test_compute_twice_is_identical() {
    let mut session = Session::with_dataset(Dataset::from_records(reference_records()));
    let first = session.compute().unwrap().clone();
    let second = session.compute().unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(second.best_decision, "A");
}

#[test]
fn test_session_sweep_uses_current_dataset() {
    let mut session = Session::with_dataset(Dataset::from_records(reference_records()));
    session.remove_at(2).unwrap();

    let result = session.sweep(&[1.0]).unwrap();
    assert!(result.get("B").is_none());
    assert_close(result.get("A").unwrap().points[0].ev, 300.0);
}

#[test]
fn test_remove_by_stale_id_fails_cleanly() {
    let mut session = Session::with_dataset(Dataset::from_records(reference_records()));
    let id = session.dataset().id_at(0).unwrap();
    session.remove(id).unwrap();

    assert_eq!(session.remove(id), Err(DecisionError::UnknownRecord(id)));
    assert_eq!(session.dataset().len(), 2);
}

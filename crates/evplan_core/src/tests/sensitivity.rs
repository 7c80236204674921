//! Tests for the probability sweep

use super::{assert_close, reference_records};
use crate::error::DecisionError;
use crate::model::Record;
use crate::sensitivity::{DEFAULT_PROBABILITY_POINTS, sweep};

#[test]
fn test_reference_dataset_sweep() {
    let result = sweep(&reference_records(), &[0.2, 0.8]).unwrap();
    assert_eq!(result.len(), 2);

    let a = result.get("A").unwrap();
    assert_eq!(a.points.len(), 2);
    assert_close(a.points[0].probability, 0.2);
    assert_close(a.points[0].ev, 60.0);
    assert_close(a.points[1].probability, 0.8);
    assert_close(a.points[1].ev, 240.0);

    let b = result.get("B").unwrap();
    assert_close(b.points[0].ev, 0.0);
    assert_close(b.points[1].ev, 0.0);
}

#[test]
fn test_sweep_overrides_stored_probabilities() {
    // Stored probabilities differ per condition; the sweep ignores them
    let records = vec![
        Record::new("Launch", "Strong", 0.9, 0.0, 1_000.0),
        Record::new("Launch", "Weak", 0.1, 0.0, -400.0),
    ];

    let result = sweep(&records, &[0.5]).unwrap();
    assert_close(result.get("Launch").unwrap().points[0].ev, 300.0);
}

#[test]
fn test_sweep_keeps_point_order() {
    let points = [0.9, 0.1, 0.5];
    let result = sweep(&reference_records(), &points).unwrap();

    let swept: Vec<f64> = result.get("A").unwrap().xy().iter().map(|(p, _)| *p).collect();
    assert_eq!(swept, points);
}

#[test]
fn test_sweep_default_points() {
    let result = sweep(&reference_records(), &DEFAULT_PROBABILITY_POINTS).unwrap();
    let evs: Vec<f64> = result.get("A").unwrap().points.iter().map(|p| p.ev).collect();

    for (actual, expected) in evs.iter().zip([60.0, 120.0, 180.0, 240.0]) {
        assert_close(*actual, expected);
    }
}

#[test]
fn test_sweep_series_in_first_appearance_order() {
    let records = vec![
        Record::new("Z", "X", 1.0, 0.0, 1.0),
        Record::new("M", "X", 1.0, 0.0, 1.0),
        Record::new("Z", "Y", 1.0, 0.0, 1.0),
    ];

    let result = sweep(&records, &[0.5]).unwrap();
    let order: Vec<&str> = result.series.iter().map(|s| s.decision.as_str()).collect();
    assert_eq!(order, ["Z", "M"]);
}

#[test]
fn test_sweep_empty_dataset() {
    let records: Vec<Record> = Vec::new();
    assert_eq!(
        sweep(&records, &DEFAULT_PROBABILITY_POINTS),
        Err(DecisionError::EmptyDataset)
    );
}

#[test]
fn test_sweep_ev_bounds() {
    let result = sweep(&reference_records(), &[0.2, 0.8]).unwrap();
    let (lo, hi) = result.ev_bounds().unwrap();
    assert_close(lo, 0.0);
    assert_close(hi, 240.0);
}

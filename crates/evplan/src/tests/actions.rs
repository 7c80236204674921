//! Action handler tests

use crate::actions::{self, ActionResult};
use crate::state::{AppState, ModalState};

use super::{form_values, reference_records, reference_state};

fn message_of(result: &ActionResult) -> (&str, &str, bool) {
    match result {
        ActionResult::Done(Some(ModalState::Message(m)))
        | ActionResult::Modified(Some(ModalState::Message(m))) => {
            (m.title.as_str(), m.message.as_str(), m.is_error)
        }
        other => panic!("expected a message modal, got {other:?}"),
    }
}

#[test]
fn test_add_valid_record_strips_separators() {
    let mut state = AppState::default();
    let result = actions::handle_add_record(
        &mut state,
        &form_values(["Launch", "Strong", "0.6", "1.500.000", "4.000.000"]),
    );
    assert!(matches!(result, ActionResult::Modified(None)));
    result.apply(&mut state);

    let record = state.session.dataset().get_at(0).unwrap();
    assert_eq!(record.cost(), 1_500_000.0);
    assert_eq!(record.revenue(), 4_000_000.0);
    assert_eq!(record.payoff(), 2_500_000.0);
    assert!(state.dirty);
}

#[test]
fn test_add_invalid_record_shows_notice_and_keeps_dataset() {
    let mut state = reference_state();
    let result = actions::handle_add_record(
        &mut state,
        &form_values(["C", "W", "0.5", "abc", "100"]),
    );

    let (title, _, is_error) = message_of(&result);
    assert_eq!(title, "Invalid input");
    assert!(is_error);
    assert_eq!(state.session.dataset().len(), 3);
}

#[test]
fn test_new_record_becomes_selected() {
    let mut state = reference_state();
    actions::handle_add_record(&mut state, &form_values(["C", "W", "1", "0", "10"]))
        .apply(&mut state);
    assert_eq!(state.dataset_state.selected_index, 3);
}

#[test]
fn test_delete_by_id_keeps_other_ids() {
    let mut state = reference_state();
    let first = state.session.dataset().id_at(0).unwrap();
    let last = state.session.dataset().id_at(2).unwrap();

    state.dataset_state.selected_index = 2;
    actions::handle_delete_record(&mut state, Some(last)).apply(&mut state);

    assert_eq!(state.session.dataset().len(), 2);
    assert_eq!(state.session.dataset().id_at(0), Some(first));
    // Selection moves back onto the new last row
    assert_eq!(state.dataset_state.selected_index, 1);
}

#[test]
fn test_delete_stale_id_is_error() {
    let mut state = reference_state();
    let id = state.session.dataset().id_at(0).unwrap();
    actions::handle_delete_record(&mut state, Some(id)).apply(&mut state);

    actions::handle_delete_record(&mut state, Some(id)).apply(&mut state);
    assert!(state.error_message.is_some());
    assert_eq!(state.session.dataset().len(), 2);
}

#[test]
fn test_compute_shows_summary() {
    let mut state = reference_state();
    let result = actions::handle_compute(&mut state);

    let (title, message, is_error) = message_of(&result);
    assert_eq!(title, "EV Result");
    assert!(!is_error);
    assert_eq!(
        message,
        "Expected Value:\nA : Rp150\nB : Rp0\n\nBest Decision:\nA"
    );
    assert!(!state.session.is_ev_stale());
}

#[test]
fn test_compute_empty_warns_and_keeps_previous_result() {
    let mut state = reference_state();
    actions::handle_compute(&mut state).apply(&mut state);
    state.session.clear();

    let result = actions::handle_compute(&mut state);
    let (_, message, is_error) = message_of(&result);
    assert_eq!(message, "Data is empty");
    assert!(is_error);

    let previous = state.session.last_ev().unwrap();
    assert_eq!(previous.best_decision, "A");
    assert!(state.session.is_ev_stale());
}

#[test]
fn test_export_without_path_is_error() {
    let mut state = reference_state();
    actions::handle_export(&mut state).apply(&mut state);
    assert_eq!(
        state.error_message.as_deref(),
        Some("No dataset file configured")
    );
}

#[test]
fn test_export_then_import_restores_records() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = reference_state();
    state.config.dataset_path = Some(dir.path().join("plan.yaml"));
    state.dirty = true;

    actions::handle_export(&mut state).apply(&mut state);
    assert!(!state.dirty);

    state.session.clear();
    actions::handle_import(&mut state).apply(&mut state);

    assert_eq!(state.session.dataset().to_records(), reference_records());
    assert!(!state.dirty);
    assert!(matches!(state.modal, ModalState::Message(_)));
}

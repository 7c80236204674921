// Record actions - add, delete and EV computation

use evplan_core::{DecisionError, InputField, RecordId, RecordInput};

use crate::state::{AppState, ConfirmModal, FormModal, MessageModal, ModalAction, ModalState};
use crate::util::format::format_ev_summary;

use super::ActionResult;

/// Open the five-field form for a new record
pub fn open_add_form() -> ActionResult {
    ActionResult::modal(ModalState::Form(FormModal::add_record()))
}

/// Build a record from submitted form values and append it.
///
/// Values arrive in form order: decision, condition, probability, cost,
/// revenue. Unparseable input leaves the dataset untouched; the form stays
/// open with its values and the error.
pub fn handle_add_record(state: &mut AppState, values: &[String]) -> ActionResult {
    let value = |i: usize| values.get(i).map(String::as_str).unwrap_or("");
    let input = RecordInput::new(value(0), value(1), value(2), value(3), value(4));

    match state.session.append(&input) {
        Ok(id) => {
            if let Some(pos) = state.session.dataset().position_of(id) {
                state.dataset_state.selected_index = pos;
            }
            ActionResult::modified()
        }
        Err(e @ DecisionError::InvalidInput { field, .. }) => {
            // Keep the typed values so the field can be corrected
            match std::mem::take(&mut state.modal) {
                ModalState::Form(mut form) => {
                    form.focused_field = form_position(field);
                    form.error = Some(e.to_string());
                    ActionResult::modal(ModalState::Form(form))
                }
                _ => ActionResult::modal(ModalState::Message(MessageModal::error(
                    "Invalid input",
                    &e.to_string(),
                ))),
            }
        }
        Err(e) => ActionResult::error(e.to_string()),
    }
}

/// Index of the add-record form field holding `field`
fn form_position(field: InputField) -> usize {
    match field {
        InputField::Probability => 2,
        InputField::Cost => 3,
        InputField::Revenue => 4,
    }
}

/// Ask before deleting the highlighted record
pub fn confirm_delete(state: &AppState) -> ActionResult {
    let Some(id) = state.selected_record_id() else {
        return ActionResult::error("No record selected");
    };
    let Some(record) = state.session.dataset().get(id) else {
        return ActionResult::error(DecisionError::UnknownRecord(id).to_string());
    };

    let message = format!(
        "Delete \"{}\" / \"{}\"? This cannot be undone.",
        record.decision(),
        record.condition()
    );
    ActionResult::modal(ModalState::Confirm(
        ConfirmModal::new("Delete Record", &message, ModalAction::DeleteRecord).with_record(id),
    ))
}

/// Remove a record by id
pub fn handle_delete_record(state: &mut AppState, id: Option<RecordId>) -> ActionResult {
    let Some(id) = id else {
        return ActionResult::error("No record selected");
    };

    match state.session.remove(id) {
        Ok(_) => ActionResult::modified(),
        Err(e) => ActionResult::error(e.to_string()),
    }
}

/// Compute EV and show the per-decision summary
pub fn handle_compute(state: &mut AppState) -> ActionResult {
    let prefix = state.config.currency_prefix.clone();
    match state.session.compute() {
        Ok(summary) => ActionResult::modal(ModalState::Message(MessageModal::info(
            "EV Result",
            &format_ev_summary(summary, &prefix),
        ))),
        Err(DecisionError::EmptyDataset) => ActionResult::modal(ModalState::Message(
            MessageModal::error("Warning", "Data is empty"),
        )),
        Err(e) => ActionResult::error(e.to_string()),
    }
}

// Dataset file actions - export and import of the configured YAML file

use crate::data::storage::{StorageError, load_dataset, save_dataset};
use crate::state::{AppState, MessageModal, ModalState};

use super::ActionResult;

/// Write the dataset to the configured file
pub fn handle_export(state: &mut AppState) -> ActionResult {
    let Some(path) = state.dataset_path().cloned() else {
        return ActionResult::error(StorageError::NoPath.to_string());
    };

    match save_dataset(&path, state.session.dataset()) {
        Ok(()) => {
            state.dirty = false;
            ActionResult::modal(ModalState::Message(MessageModal::info(
                "Exported",
                &format!(
                    "Saved {} record(s) to {}",
                    state.session.dataset().len(),
                    path.display()
                ),
            )))
        }
        Err(e) => ActionResult::error(format!("Export failed: {e}")),
    }
}

/// Replace the dataset with the contents of the configured file
pub fn handle_import(state: &mut AppState) -> ActionResult {
    let Some(path) = state.dataset_path().cloned() else {
        return ActionResult::error(StorageError::NoPath.to_string());
    };

    match load_dataset(&path) {
        Ok(records) => {
            let count = records.len();
            state.session.replace(records);
            state.dataset_state.selected_index = 0;
            state.clamp_selection();
            state.dirty = false;
            ActionResult::modal(ModalState::Message(MessageModal::info(
                "Imported",
                &format!("Loaded {} record(s) from {}", count, path.display()),
            )))
        }
        Err(e) => ActionResult::error(format!("Import failed: {e}")),
    }
}

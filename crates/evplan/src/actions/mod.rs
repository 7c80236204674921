// Actions module - handlers behind the dataset keys and modal confirmations
//
// Screens and the app loop call these and apply the returned ActionResult,
// so the state changes stay out of the rendering code.

mod dataset_file;
mod record;

pub use dataset_file::*;
pub use record::*;

use crate::state::{AppState, ModalState};

/// Result of an action handler
///
/// Actions can either complete (returning a new modal state or None to close),
/// or require additional state changes that must be handled by the caller.
#[derive(Debug)]
pub enum ActionResult {
    /// Action completed, set modal to this state (None closes the modal)
    Done(Option<ModalState>),
    /// Action changed the dataset; the state gets marked as modified
    Modified(Option<ModalState>),
    /// Action failed with an error message
    Error(String),
}

impl ActionResult {
    /// Create a result that closes the modal
    pub fn close() -> Self {
        ActionResult::Done(None)
    }

    /// Create a result that shows a new modal
    pub fn modal(state: ModalState) -> Self {
        ActionResult::Done(Some(state))
    }

    /// Create a result that closes the modal and marks state as modified
    pub fn modified() -> Self {
        ActionResult::Modified(None)
    }

    /// Create an error result
    pub fn error(msg: impl Into<String>) -> Self {
        ActionResult::Error(msg.into())
    }

    /// Write the result back into the app state.
    pub fn apply(self, state: &mut AppState) {
        match self {
            ActionResult::Done(modal) => {
                state.modal = modal.unwrap_or_default();
            }
            ActionResult::Modified(modal) => {
                state.mark_modified();
                state.modal = modal.unwrap_or_default();
            }
            ActionResult::Error(msg) => {
                state.set_error(msg);
                state.modal = ModalState::None;
            }
        }
    }
}

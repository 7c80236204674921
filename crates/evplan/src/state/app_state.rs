use std::path::PathBuf;

use evplan_core::{RecordId, Session};

use super::{ModalState, TabId};
use crate::config::AppConfig;

#[derive(Debug, Default)]
pub struct DatasetState {
    pub selected_index: usize,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub active_tab: TabId,
    pub session: Session,
    pub config: AppConfig,
    pub dataset_state: DatasetState,
    pub modal: ModalState,
    pub error_message: Option<String>,
    /// Dataset changed since the last import/export
    pub dirty: bool,
    pub exit: bool,
}

impl AppState {
    pub fn new(config: AppConfig, session: Session) -> Self {
        Self {
            config,
            session,
            ..Self::default()
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn mark_modified(&mut self) {
        self.dirty = true;
        self.clamp_selection();
    }

    /// Id of the highlighted table row, if the dataset is not empty
    pub fn selected_record_id(&self) -> Option<RecordId> {
        self.session
            .dataset()
            .id_at(self.dataset_state.selected_index)
    }

    /// Keep the selection on a valid row after the dataset shrank.
    pub fn clamp_selection(&mut self) {
        let len = self.session.dataset().len();
        if self.dataset_state.selected_index >= len {
            self.dataset_state.selected_index = len.saturating_sub(1);
        }
    }

    pub fn currency_prefix(&self) -> &str {
        &self.config.currency_prefix
    }

    pub fn sweep_points(&self) -> &[f64] {
        &self.config.sweep_points
    }

    pub fn dataset_path(&self) -> Option<&PathBuf> {
        self.config.dataset_path.as_ref()
    }
}

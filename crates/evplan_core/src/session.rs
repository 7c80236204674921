//! Interactive session state: the dataset plus the last EV result.
//!
//! Every operation either fully succeeds or leaves the session untouched. A
//! failed `compute` keeps the previous summary; a successful dataset mutation
//! keeps it too but marks it stale until the next `compute`.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::ev::{EvSummary, compute_ev};
use crate::model::{Record, RecordId, RecordInput};
use crate::sensitivity::{SweepResult, sweep};

#[derive(Debug, Clone, Default)]
pub struct Session {
    dataset: Dataset,
    last_ev: Option<EvSummary>,
    ev_stale: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            dataset,
            ..Self::default()
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn append(&mut self, input: &RecordInput) -> Result<RecordId> {
        let (id, _) = self.dataset.append(input)?;
        self.mark_stale();
        Ok(id)
    }

    pub fn remove_at(&mut self, position: usize) -> Result<Record> {
        let record = self.dataset.remove_at(position)?;
        self.mark_stale();
        Ok(record)
    }

    pub fn remove(&mut self, id: RecordId) -> Result<Record> {
        let record = self.dataset.remove(id)?;
        self.mark_stale();
        Ok(record)
    }

    pub fn clear(&mut self) {
        self.dataset.clear();
        self.mark_stale();
    }

    pub fn replace(&mut self, records: impl IntoIterator<Item = Record>) {
        self.dataset.replace(records);
        self.mark_stale();
    }

    /// Recompute the EV map from scratch and remember it.
    pub fn compute(&mut self) -> Result<&EvSummary> {
        let summary = compute_ev(&self.dataset)?;
        self.ev_stale = false;
        Ok(self.last_ev.insert(summary))
    }

    /// Sweep the current dataset over `points`.
    pub fn sweep(&self, points: &[f64]) -> Result<SweepResult> {
        sweep(&self.dataset, points)
    }

    /// Last successfully computed summary, possibly stale
    pub fn last_ev(&self) -> Option<&EvSummary> {
        self.last_ev.as_ref()
    }

    /// Whether the dataset changed since `last_ev` was computed
    pub fn is_ev_stale(&self) -> bool {
        self.last_ev.is_some() && self.ev_stale
    }

    fn mark_stale(&mut self) {
        self.ev_stale = true;
    }
}

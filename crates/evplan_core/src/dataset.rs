//! Ordered record store.
//!
//! Records live in an arena keyed by [`RecordId`]; a separate list holds the
//! display order. Positional operations go through the order list, so a
//! position is only meaningful against the dataset it was read from, while an
//! id stays valid until that record is removed.

use rustc_hash::FxHashMap;

use crate::error::{DecisionError, Result};
use crate::model::{Record, RecordId, RecordInput};

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: FxHashMap<RecordId, Record>,
    order: Vec<RecordId>,
    next_id: u64,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from already-parsed records, keeping their order.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut dataset = Self::new();
        for record in records {
            dataset.push(record);
        }
        dataset
    }

    /// Parse the five text fields and append the resulting record.
    ///
    /// Parsing completes before the store is touched, so a failed append
    /// leaves the dataset exactly as it was.
    pub fn append(&mut self, input: &RecordInput) -> Result<(RecordId, &Record)> {
        let record = match input.parse() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "rejected record input");
                return Err(e);
            }
        };

        let id = self.push(record);
        Ok((id, &self.records[&id]))
    }

    /// Append an already-parsed record.
    pub fn push(&mut self, record: Record) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;

        tracing::debug!(
            %id,
            decision = record.decision(),
            condition = record.condition(),
            payoff = record.payoff(),
            "appended record"
        );

        self.records.insert(id, record);
        self.order.push(id);
        id
    }

    /// Remove the record at `position`; later records shift down by one.
    pub fn remove_at(&mut self, position: usize) -> Result<Record> {
        if position >= self.order.len() {
            return Err(DecisionError::IndexOutOfRange {
                position,
                len: self.order.len(),
            });
        }

        let id = self.order.remove(position);
        let record = self
            .records
            .remove(&id)
            .ok_or(DecisionError::UnknownRecord(id))?;

        tracing::debug!(%id, position, "removed record");
        Ok(record)
    }

    /// Remove a record by id.
    pub fn remove(&mut self, id: RecordId) -> Result<Record> {
        let position = self
            .position_of(id)
            .ok_or(DecisionError::UnknownRecord(id))?;
        self.remove_at(position)
    }

    /// Drop every record. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.order.len(), "cleared dataset");
        self.records.clear();
        self.order.clear();
    }

    /// Replace the whole content with `records`, in order.
    pub fn replace(&mut self, records: impl IntoIterator<Item = Record>) {
        self.clear();
        for record in records {
            self.push(record);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    pub fn get_at(&self, position: usize) -> Option<&Record> {
        self.order.get(position).and_then(|id| self.records.get(id))
    }

    pub fn id_at(&self, position: usize) -> Option<RecordId> {
        self.order.get(position).copied()
    }

    pub fn position_of(&self, id: RecordId) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    /// Ids in display order
    pub fn ids(&self) -> &[RecordId] {
        &self.order
    }

    /// Records in display order
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().map(|id| &self.records[id])
    }

    /// `(id, record)` pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (RecordId, &Record)> + '_ {
        self.order.iter().map(|id| (*id, &self.records[id]))
    }

    /// Clone the records out in display order.
    pub fn to_records(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = Box<dyn Iterator<Item = &'a Record> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

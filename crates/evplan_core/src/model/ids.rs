//! Identifiers for dataset entries
//!
//! Positions shift when records are removed, so the dataset hands out a
//! `RecordId` on every append and callers holding a selection refer to it.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Record within a Dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

use thiserror::Error;

use crate::model::RecordId;

/// Input field that failed to parse when building a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Probability,
    Cost,
    Revenue,
}

impl InputField {
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Probability => "probability",
            InputField::Cost => "cost",
            InputField::Revenue => "revenue",
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors produced by the dataset store, the EV aggregator and the sweep
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecisionError {
    /// A text field could not be parsed as a number
    #[error("invalid input for {field}: {value:?}")]
    InvalidInput { field: InputField, value: String },

    /// Positional removal outside the current dataset
    #[error("position {position} out of range for dataset of {len} record(s)")]
    IndexOutOfRange { position: usize, len: usize },

    /// Aggregation requested over no records
    #[error("dataset is empty")]
    EmptyDataset,

    /// Removal by an id the dataset no longer holds
    #[error("record {0} not found")]
    UnknownRecord(RecordId),
}

impl DecisionError {
    pub(crate) fn invalid(field: InputField, value: &str) -> Self {
        DecisionError::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DecisionError>;

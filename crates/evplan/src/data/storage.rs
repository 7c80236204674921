//! Dataset file import/export
//!
//! A dataset file is a YAML document holding the records in display order:
//!
//! ```yaml
//! records:
//!   - decision: Launch
//!     condition: Strong market
//!     probability: 0.6
//!     cost: 1500000
//!     revenue: 4000000
//! ```
//!
//! Payoff is not written; it is derived again when the file is read.

use std::fs;
use std::path::Path;

use evplan_core::{Dataset, Record};
use serde::{Deserialize, Serialize};

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
    NoPath,
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::NoPath => write!(f, "No dataset file configured"),
        }
    }
}

impl std::error::Error for StorageError {}

/// On-disk shape of a dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetFile {
    #[serde(default)]
    pub records: Vec<Record>,
}

impl DatasetFile {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            records: dataset.to_records(),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, StorageError> {
        serde_saphyr::from_str(yaml).map_err(|e| StorageError::Parse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, StorageError> {
        serde_saphyr::to_string(self).map_err(|e| StorageError::Serialize(e.to_string()))
    }
}

/// Read the records of a dataset file, in file order.
pub fn load_dataset(path: &Path) -> Result<Vec<Record>, StorageError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let file = DatasetFile::from_yaml(&content)?;
    tracing::info!(
        path = %path.display(),
        records = file.records.len(),
        "loaded dataset"
    );
    Ok(file.records)
}

/// Write `dataset` to `path`, creating parent directories as needed.
pub fn save_dataset(path: &Path, dataset: &Dataset) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            StorageError::Io(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let yaml = DatasetFile::from_dataset(dataset).to_yaml()?;
    fs::write(path, yaml)
        .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    tracing::info!(
        path = %path.display(),
        records = dataset.len(),
        "saved dataset"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_keeps_order_and_payoff() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("plan.yaml");

        let dataset = Dataset::from_records([
            Record::new("Launch", "Strong", 0.6, 1_500_000.0, 4_000_000.0),
            Record::new("Launch", "Weak", 0.4, 1_500_000.0, 500_000.0),
            Record::new("Hold", "Any", 1.0, 0.0, 0.0),
        ]);

        save_dataset(&path, &dataset).unwrap();
        let loaded = load_dataset(&path).unwrap();

        assert_eq!(loaded, dataset.to_records());
        assert_eq!(loaded[1].payoff(), -1_000_000.0);
    }

    #[test]
    fn test_payoff_is_derived_on_load() {
        let yaml = "records:\n  - decision: A\n    condition: X\n    probability: 0.5\n    cost: 100\n    revenue: 300\n";
        let file = DatasetFile::from_yaml(yaml).unwrap();
        assert_eq!(file.records.len(), 1);
        assert_eq!(file.records[0].payoff(), 200.0);
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        for value in [".nan", ".inf", "-.inf"] {
            let yaml = format!(
                "records:\n  - decision: A\n    condition: X\n    probability: {value}\n    cost: 0\n    revenue: 10\n"
            );
            let err = DatasetFile::from_yaml(&yaml).unwrap_err();
            assert!(matches!(err, StorageError::Parse(_)), "{value} loaded");
        }

        let yaml = "records:\n  - decision: A\n    probability: 0.5\n    cost: .inf\n    revenue: 10\n";
        assert!(DatasetFile::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let err = DatasetFile::from_yaml("records: [{decision: A, probability: high}]").unwrap_err();
        assert!(matches!(err, StorageError::Parse(_)));
    }
}

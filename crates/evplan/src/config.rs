//! User settings stored in `{data_dir}/config.yaml`.
//!
//! Every field has a default, so a partial or missing file is fine:
//!
//! ```yaml
//! sweep_points: [0.1, 0.3, 0.5, 0.7, 0.9]
//! currency_prefix: Rp
//! dataset_path: /home/me/launch.yaml
//! ```

use std::path::{Path, PathBuf};

use evplan_core::DEFAULT_PROBABILITY_POINTS;
use serde::{Deserialize, Serialize};

use crate::data::storage::StorageError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Probabilities the sensitivity tab sweeps over
    pub sweep_points: Vec<f64>,
    /// Prefix shown in front of amounts
    pub currency_prefix: String,
    /// Dataset file loaded at start-up and used by import/export
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sweep_points: DEFAULT_PROBABILITY_POINTS.to_vec(),
            currency_prefix: "Rp".to_string(),
            dataset_path: None,
        }
    }
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.yaml")
    }

    /// Load the config file. A missing file yields the defaults.
    pub fn load(data_dir: &Path) -> Result<Self, StorageError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Load the config file, falling back to defaults on any error.
    pub fn load_or_default(data_dir: &Path) -> Self {
        match Self::load(data_dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file: {e}");
                Self::default()
            }
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, StorageError> {
        serde_saphyr::from_str(yaml).map_err(|e| StorageError::Parse(e.to_string()))
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, dataset: Option<PathBuf>, points: Option<Vec<f64>>) -> Self {
        if dataset.is_some() {
            self.dataset_path = dataset;
        }
        if let Some(points) = points.filter(|p| !p.is_empty()) {
            self.sweep_points = points;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.sweep_points, vec![0.2, 0.4, 0.6, 0.8]);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = AppConfig::from_yaml("sweep_points: [0.1, 0.9]\n").unwrap();
        assert_eq!(config.sweep_points, vec![0.1, 0.9]);
        assert_eq!(config.currency_prefix, "Rp");
        assert!(config.dataset_path.is_none());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(AppConfig::path(dir.path()), "sweep_points: [not, numbers\n").unwrap();

        assert!(AppConfig::load(dir.path()).is_err());
        assert_eq!(AppConfig::load_or_default(dir.path()), AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_overrides(Some(PathBuf::from("plan.yaml")), Some(vec![0.5]));
        assert_eq!(config.dataset_path, Some(PathBuf::from("plan.yaml")));
        assert_eq!(config.sweep_points, vec![0.5]);

        let untouched = AppConfig::default().with_overrides(None, Some(vec![]));
        assert_eq!(untouched, AppConfig::default());
    }
}

//! Pipeline options and their optional YAML file form.
//!
//! ```yaml
//! keep_audit_column: true
//! lookup_columns:
//!   bill_of_lading: ["Bill of Lading", "BOL #"]
//!   tracking_error: ["Tracking Error"]
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Adds a column with the raw lookup result for every row.
    pub keep_audit_column: bool,
    pub lookup_columns: LookupColumns,
}

/// Header names accepted for the two lookup columns, tried in order. Matching
/// ignores case and whitespace runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupColumns {
    pub bill_of_lading: Vec<String>,
    pub tracking_error: Vec<String>,
}

impl Default for LookupColumns {
    fn default() -> Self {
        Self {
            bill_of_lading: ["Bill of Lading", "BOL", "BOL #", "BOL Number"]
                .map(String::from)
                .to_vec(),
            tracking_error: ["Tracking Error", "Error Reason", "Err Reason"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl PipelineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("Opening config file {path:?}"))?;
        Self::from_yaml(&raw).with_context(|| format!("Parsing config file {path:?}"))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_audit_column() {
        let config = PipelineConfig::default();
        assert!(!config.keep_audit_column);
        assert_eq!(config.lookup_columns.bill_of_lading[0], "Bill of Lading");
        assert_eq!(config.lookup_columns.tracking_error[0], "Tracking Error");
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let config = PipelineConfig::from_yaml("keep_audit_column: true\n").unwrap();
        assert!(config.keep_audit_column);
        assert_eq!(config.lookup_columns, LookupColumns::default());

        let config =
            PipelineConfig::from_yaml("lookup_columns:\n  tracking_error: [\"Issue\"]\n").unwrap();
        assert!(!config.keep_audit_column);
        assert_eq!(config.lookup_columns.tracking_error, vec!["Issue".to_string()]);
        assert_eq!(
            config.lookup_columns.bill_of_lading,
            LookupColumns::default().bill_of_lading
        );
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(PipelineConfig::from_yaml("").unwrap(), PipelineConfig::default());
    }

    #[test]
    fn unknown_value_types_are_rejected() {
        assert!(PipelineConfig::from_yaml("keep_audit_column: [1, 2]\n").is_err());
    }
}

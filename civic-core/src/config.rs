//! Wizard configuration: TOML-backed knobs for the report flow.
//!
//! ```toml
//! reset_delay_secs = 5
//! max_attachment_bytes = 10485760
//! categories = ["Bribery", "Embezzlement", "Other"]
//!
//! [default_location]
//! lat = 27.7172
//! lng = 85.324
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CategoryCatalog;
use crate::domain::Coordinates;

/// Seconds the confirmation stays up before the wizard resets.
pub const DEFAULT_RESET_DELAY_SECS: u64 = 5;
/// Per-file limit enforced by the file picker ("Max 10MB each").
pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;
/// Longest accepted reset delay: one day.
pub const MAX_RESET_DELAY_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub reset_delay_secs: u64,
    pub max_attachment_bytes: u64,
    pub categories: CategoryCatalog,
    // Tables serialize last in TOML.
    pub default_location: Coordinates,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            reset_delay_secs: DEFAULT_RESET_DELAY_SECS,
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
            categories: CategoryCatalog::default(),
            default_location: Coordinates::default(),
        }
    }
}

impl WizardConfig {
    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML string. Missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_secs(self.reset_delay_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::Invalid("category list is empty".into()));
        }
        let mut seen = HashSet::new();
        for (label, slug) in self.categories.entries() {
            if slug.trim().is_empty() {
                return Err(ConfigError::Invalid("blank category label".into()));
            }
            if !seen.insert(slug) {
                return Err(ConfigError::Invalid(format!("duplicate category: {label}")));
            }
        }
        if self.reset_delay_secs > MAX_RESET_DELAY_SECS {
            return Err(ConfigError::Invalid(format!(
                "reset_delay_secs must be at most {MAX_RESET_DELAY_SECS}"
            )));
        }
        if !self.default_location.is_finite() {
            return Err(ConfigError::Invalid(
                "default_location must be finite".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = WizardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reset_delay(), Duration::from_secs(5));
        assert_eq!(config.categories.len(), 7);
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = WizardConfig::default();
        config.reset_delay_secs = 8;
        config.default_location = Coordinates::new(28.2096, 83.9856);
        let text = config.to_toml().unwrap();
        let parsed = WizardConfig::from_toml(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = WizardConfig::from_toml("reset_delay_secs = 2\n").unwrap();
        assert_eq!(config.reset_delay_secs, 2);
        assert_eq!(config.categories, CategoryCatalog::default());
        assert_eq!(config.default_location, Coordinates::default());
    }

    #[test]
    fn custom_categories_parse_in_order() {
        let config =
            WizardConfig::from_toml("categories = [\"Kickbacks\", \"Other\"]\n").unwrap();
        assert_eq!(config.categories.labels(), ["Kickbacks", "Other"]);
    }

    #[test]
    fn rejects_empty_categories() {
        let err = WizardConfig::from_toml("categories = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let err = WizardConfig::from_toml("categories = [\"Other\", \"OTHER\"]\n").unwrap_err();
        assert!(err.to_string().contains("duplicate category"));
    }

    #[test]
    fn rejects_blank_category() {
        let err = WizardConfig::from_toml("categories = [\"  \"]\n").unwrap_err();
        assert!(err.to_string().contains("blank category"));
    }

    #[test]
    fn rejects_non_finite_location() {
        let err = WizardConfig::from_toml("[default_location]\nlat = nan\nlng = 85.3\n")
            .unwrap_err();
        assert!(err.to_string().contains("finite"));

        let err = WizardConfig::from_toml("[default_location]\nlat = 27.7\nlng = inf\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_huge_reset_delay() {
        let err = WizardConfig::from_toml("reset_delay_secs = 9223372036854775807\n").unwrap_err();
        assert!(err.to_string().contains("reset_delay_secs"));

        let config = WizardConfig::from_toml("reset_delay_secs = 86400\n").unwrap();
        assert_eq!(config.reset_delay(), Duration::from_secs(MAX_RESET_DELAY_SECS));
    }

    #[test]
    fn rejects_garbage() {
        let err = WizardConfig::from_toml("reset_delay_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WizardConfig::load_or_default(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, WizardConfig::default());
    }

    #[test]
    fn from_file_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_attachment_bytes = 1024\n").unwrap();
        let config = WizardConfig::from_file(&path).unwrap();
        assert_eq!(config.max_attachment_bytes, 1024);
    }
}

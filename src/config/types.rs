//! Configuration Types
//!
//! All configuration structures with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::output::DEFAULT_FILENAME;
use crate::types::{PrdError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package output settings
    pub output: OutputConfig,
}

impl Config {
    /// Validate configuration values.
    /// Returns `PrdError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        let filename = self.output.filename.trim();
        if filename.is_empty() {
            return Err(PrdError::Config(
                "output.filename must not be empty".to_string(),
            ));
        }

        // Joining an absolute path would escape the input directory
        if Path::new(filename).is_absolute() {
            return Err(PrdError::Config(format!(
                "output.filename must be relative to the input directory, got {}",
                filename
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Package filename, relative to the input directory
    pub filename: String,

    /// Write through a temp file and rename into place
    pub atomic: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            atomic: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.output.filename, "full-prd-package.md");
        assert!(config.output.atomic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_filename_rejected() {
        let mut config = Config::default();
        config.output.filename = "  ".to_string();
        assert!(matches!(config.validate(), Err(PrdError::Config(_))));
    }

    #[test]
    fn test_absolute_filename_rejected() {
        let mut config = Config::default();
        config.output.filename = "/tmp/package.md".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[output]\natomic = false\n").unwrap();
        assert_eq!(config.output.filename, "full-prd-package.md");
        assert!(!config.output.atomic);
    }
}

//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/prdpack/config.toml)
//! 3. Input directory config (<input-dir>/.prdpack.toml)
//! 4. Explicit config file (--config)
//! 5. Environment variables (PRDPACK_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::constants::config::{APP_DIR, ENV_PREFIX, GLOBAL_FILE, PROJECT_FILE};
use crate::types::{PrdError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → global → input directory → explicit file → env vars
    pub fn load(input_dir: Option<&Path>, explicit: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Merge global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        // Merge config living next to the documents
        if let Some(dir) = input_dir {
            let project_path = Self::project_config_path(dir);
            if project_path.exists() {
                debug!("Loading project config from: {}", project_path.display());
                figment = figment.merge(Toml::file(&project_path));
            }
        }

        // An explicitly requested file must exist
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(PrdError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        // Merge environment variables (e.g., PRDPACK_OUTPUT_FILENAME -> output.filename)
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| PrdError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/prdpack/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join(APP_DIR))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join(GLOBAL_FILE))
    }

    /// Get path to the config file inside an input directory
    pub fn project_config_path(input_dir: &Path) -> PathBuf {
        input_dir.join(PROJECT_FILE)
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Render the effective configuration as TOML or JSON
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| PrdError::Config(e.to_string()))
        }
    }
}

//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/prdpack/config.toml)
//! 3. Input directory config (<input-dir>/.prdpack.toml)
//! 4. Explicit config file (--config)
//! 5. Environment variables (PRDPACK_*)
//! 6. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;

//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Categories
//!
//! - **Input**: The input directory is unusable or holds none of the known documents
//! - **Io**: Reading a document or writing the package failed
//! - **Config**: Configuration could not be loaded or failed validation
//!
//! A document that is simply absent is not an error; it is collected as a
//! missing entry on the assembly result and reported as a warning.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// Coarse classification used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The user pointed us at the wrong place
    Input,
    /// Filesystem failure while reading or writing
    Io,
    /// Configuration problem
    Config,
    /// Serialization of a report failed
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "INPUT"),
            Self::Io => write!(f, "IO"),
            Self::Config => write!(f, "CONFIG"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum PrdError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Filesystem Errors (with path context)
    // -------------------------------------------------------------------------
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Input directory does not exist: {}", .0.display())]
    InputDirNotFound(PathBuf),

    #[error("Input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No documents found to assemble in {}", .input_dir.display())]
    NoDocumentsFound { input_dir: PathBuf },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PrdError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl PrdError {
    /// Create a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for `path`
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputDirNotFound(_) | Self::NotADirectory(_) | Self::NoDocumentsFound { .. } => {
                ErrorCategory::Input
            }
            Self::Read { .. } | Self::Write { .. } => ErrorCategory::Io,
            Self::Config(_) => ErrorCategory::Config,
            Self::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Errors caused by how the tool was invoked rather than by the system
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Input | ErrorCategory::Config
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

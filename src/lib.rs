//! prdpack - PRD Package Assembler
//!
//! Combines the PRD documents of a project (masterplan, implementation plan,
//! design guidelines, app flow, and the Lovable knowledge base summary) into
//! a single markdown package with a banner-wrapped section per document.
//!
//! ## Quick Start
//!
//! ```ignore
//! use prdpack::Assembler;
//!
//! let report = Assembler::new("./output").assemble()?;
//! println!("wrote {}", report.output_path.display());
//! ```
//!
//! ## Modules
//!
//! - [`assembler`]: Document collection, rendering, and package writing
//! - [`config`]: Layered configuration (defaults, files, environment)
//! - [`cli`]: Command handlers and console output
//! - [`types`]: Document catalog and error types

pub mod assembler;
pub mod cli;
pub mod config;
pub mod constants;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use assembler::{
    Assembler, AssemblyReport, AssemblyResult, DocumentSource, FsSource, MemorySource, Section,
    assemble, collect,
};

// Configuration
pub use config::{Config, ConfigLoader, OutputConfig};

// Types
pub use types::{DocumentSpec, ErrorCategory, PRD_DOCUMENTS, PrdError, Result};

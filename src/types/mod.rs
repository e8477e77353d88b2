pub mod document;
pub mod error;

pub use document::{DocumentSpec, PRD_DOCUMENTS};
pub use error::{ErrorCategory, PrdError, Result};

//! Document Sources
//!
//! Where the assembler gets document text from. The filesystem source is
//! what the CLI uses; the in-memory source lets the pipeline run without
//! touching disk.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::trace;

use crate::types::{PrdError, Result};

/// Lookup of document text by filename.
///
/// `Ok(None)` means the document is absent, which the assembler treats as a
/// soft condition. Any other failure is returned as an error.
pub trait DocumentSource {
    fn load(&self, filename: &str) -> Result<Option<String>>;
}

/// Reads documents from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for FsSource {
    fn load(&self, filename: &str) -> Result<Option<String>> {
        let path = self.root.join(filename);
        match fs::read_to_string(&path) {
            Ok(content) => {
                trace!(path = %path.display(), bytes = content.len(), "read document");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PrdError::read(path, e)),
        }
    }
}

/// Documents held in memory, keyed by filename.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a document
    pub fn with(mut self, filename: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(filename, content);
        self
    }

    pub fn insert(&mut self, filename: impl Into<String>, content: impl Into<String>) {
        self.documents.insert(filename.into(), content.into());
    }
}

impl DocumentSource for MemorySource {
    fn load(&self, filename: &str) -> Result<Option<String>> {
        Ok(self.documents.get(filename).cloned())
    }
}

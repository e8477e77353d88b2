//! PRD Package Assembler
//!
//! Combines the known PRD documents found in an input directory into one
//! markdown package.
//!
//! ## Pipeline
//!
//! ```text
//! PRD_DOCUMENTS ─▶ DocumentSource::load ─▶ render_section ─▶ render_package ─▶ write_package
//!                        │
//!                        └─ absent ─▶ missing list (warning only)
//! ```
//!
//! Collection is separated from writing so callers can report missing
//! documents before the write (or the "no documents" failure) happens.

mod render;
mod source;
mod writer;

pub use render::{banner, preamble, render_package, render_section};
pub use source::{DocumentSource, FsSource, MemorySource};
pub use writer::write_package;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::OutputConfig;
use crate::constants::output::DEFAULT_FILENAME;
use crate::types::{DocumentSpec, PRD_DOCUMENTS, PrdError, Result};

// =============================================================================
// Assembly Result
// =============================================================================

/// One found document rendered as a package section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub spec: DocumentSpec,
    pub text: String,
}

/// Outcome of reading the documents, before anything is written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyResult {
    /// Rendered sections in catalog order
    pub sections: Vec<Section>,
    /// Filenames that were not present, in catalog order
    pub missing: Vec<&'static str>,
}

impl AssemblyResult {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Filenames of the documents that were found
    pub fn included(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.spec.filename).collect()
    }

    /// `Missing documents: a.md, b.md`, or `None` when nothing is missing
    pub fn missing_message(&self) -> Option<String> {
        if self.missing.is_empty() {
            None
        } else {
            Some(format!("Missing documents: {}", self.missing.join(", ")))
        }
    }

    /// Full package text, or `None` when no document was found
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let texts: Vec<&str> = self.sections.iter().map(|s| s.text.as_str()).collect();
        Some(render_package(texts.as_slice()))
    }
}

/// Load every document in `documents` from `source`, in order.
///
/// Absent documents are recorded as missing. Read failures abort.
pub fn collect<S: DocumentSource + ?Sized>(
    source: &S,
    documents: &[DocumentSpec],
) -> Result<AssemblyResult> {
    let mut result = AssemblyResult::default();

    for spec in documents {
        match source.load(spec.filename)? {
            Some(content) => {
                debug!(file = spec.filename, title = spec.title, "including document");
                result.sections.push(Section {
                    spec: *spec,
                    text: render_section(spec, &content),
                });
            }
            None => {
                debug!(file = spec.filename, "document not found");
                result.missing.push(spec.filename);
            }
        }
    }

    Ok(result)
}

// =============================================================================
// Assembly Report
// =============================================================================

/// What an assembly run did (or, for a dry run, would do)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblyReport {
    pub output_path: PathBuf,
    pub included: Vec<&'static str>,
    pub missing: Vec<&'static str>,
    pub bytes: usize,
    pub written: bool,
}

// =============================================================================
// Assembler
// =============================================================================

/// Filesystem-backed assembler for one input directory
#[derive(Debug, Clone)]
pub struct Assembler {
    input_dir: PathBuf,
    output_filename: String,
    atomic: bool,
}

impl Assembler {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_filename: DEFAULT_FILENAME.to_string(),
            atomic: true,
        }
    }

    /// Assembler using the output settings from configuration
    pub fn from_config(input_dir: impl Into<PathBuf>, output: &OutputConfig) -> Self {
        Self::new(input_dir)
            .output_filename(output.filename.clone())
            .atomic(output.atomic)
    }

    /// Output filename, resolved relative to the input directory
    pub fn output_filename(mut self, filename: impl Into<String>) -> Self {
        self.output_filename = filename.into();
        self
    }

    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.input_dir.join(&self.output_filename)
    }

    /// Fail unless the input directory exists and is a directory
    pub fn check_input_dir(&self) -> Result<()> {
        match fs::metadata(&self.input_dir) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(PrdError::NotADirectory(self.input_dir.clone())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(PrdError::InputDirNotFound(self.input_dir.clone()))
            }
            Err(e) => Err(PrdError::read(&self.input_dir, e)),
        }
    }

    /// Read the known documents from the input directory
    pub fn collect(&self) -> Result<AssemblyResult> {
        self.check_input_dir()?;
        collect(&FsSource::new(&self.input_dir), &PRD_DOCUMENTS)
    }

    /// Describe the write without performing it
    pub fn plan(&self, result: &AssemblyResult) -> Result<AssemblyReport> {
        let package = self.package_text(result)?;
        Ok(self.report(result, package.len(), false))
    }

    /// Write the package for `result`.
    ///
    /// Fails with `NoDocumentsFound` (writing nothing) when `result` is empty.
    pub fn write(&self, result: &AssemblyResult) -> Result<AssemblyReport> {
        let package = self.package_text(result)?;
        let output_path = self.output_path();

        write_package(&output_path, &package, self.atomic)?;
        info!(
            path = %output_path.display(),
            sections = result.sections.len(),
            bytes = package.len(),
            "wrote PRD package"
        );

        Ok(self.report(result, package.len(), true))
    }

    /// Collect and write in one step
    pub fn assemble(&self) -> Result<AssemblyReport> {
        let result = self.collect()?;
        self.write(&result)
    }

    fn package_text(&self, result: &AssemblyResult) -> Result<String> {
        result.render().ok_or_else(|| PrdError::NoDocumentsFound {
            input_dir: self.input_dir.clone(),
        })
    }

    fn report(&self, result: &AssemblyResult, bytes: usize, written: bool) -> AssemblyReport {
        AssemblyReport {
            output_path: self.output_path(),
            included: result.included(),
            missing: result.missing.clone(),
            bytes,
            written,
        }
    }
}

/// Assemble the PRD package in `input_dir` into `output_filename`
pub fn assemble(input_dir: impl AsRef<Path>, output_filename: &str) -> Result<AssemblyReport> {
    Assembler::new(input_dir.as_ref())
        .output_filename(output_filename)
        .assemble()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn source_with(indices: &[usize]) -> MemorySource {
        let mut source = MemorySource::new();
        for &i in indices {
            let spec = &PRD_DOCUMENTS[i];
            source.insert(spec.filename, format!("content of {}", spec.filename));
        }
        source
    }

    #[test]
    fn test_collect_only_masterplan() {
        let source = MemorySource::new().with("masterplan.md", "Hello");
        let result = collect(&source, &PRD_DOCUMENTS).unwrap();

        assert_eq!(result.included(), vec!["masterplan.md"]);
        assert_eq!(
            result.missing_message().unwrap(),
            "Missing documents: implementation-plan.md, design-guidelines.md, \
             app-flow-pages-and-roles.md, lovable-knowledge-base.md"
        );

        let rule = "=".repeat(60);
        assert_eq!(
            result.render().unwrap(),
            format!("{}{rule}\n# MASTERPLAN\n{rule}\n\nHello\n\n", preamble())
        );
    }

    #[test]
    fn test_collect_nothing_found() {
        let result = collect(&MemorySource::new(), &PRD_DOCUMENTS).unwrap();

        assert!(result.is_empty());
        assert!(result.render().is_none());
        assert_eq!(result.missing.len(), 5);
    }

    #[test]
    fn test_collect_all_found_has_no_warning() {
        let result = collect(&source_with(&[0, 1, 2, 3, 4]), &PRD_DOCUMENTS).unwrap();

        assert!(result.missing_message().is_none());
        assert_eq!(result.sections.len(), 5);
    }

    #[test]
    fn test_assemble_writes_package() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("masterplan.md"), "Hello").unwrap();
        fs::write(temp_dir.path().join("lovable-knowledge-base.md"), "KB").unwrap();

        let report = assemble(temp_dir.path(), DEFAULT_FILENAME).unwrap();

        assert!(report.written);
        assert_eq!(report.output_path, temp_dir.path().join(DEFAULT_FILENAME));
        assert_eq!(
            report.included,
            vec!["masterplan.md", "lovable-knowledge-base.md"]
        );

        let written = fs::read_to_string(&report.output_path).unwrap();
        assert_eq!(written.len(), report.bytes);
        let masterplan = written.find("# MASTERPLAN").unwrap();
        let kb = written.find("# LOVABLE KNOWLEDGE BASE SUMMARY").unwrap();
        assert!(masterplan < kb);
    }

    #[test]
    fn test_assemble_empty_dir_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();

        let err = assemble(temp_dir.path(), DEFAULT_FILENAME).unwrap_err();

        assert!(matches!(err, PrdError::NoDocumentsFound { .. }));
        assert!(!temp_dir.path().join(DEFAULT_FILENAME).exists());
    }

    #[test]
    fn test_assemble_empty_dir_keeps_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join(DEFAULT_FILENAME);
        fs::write(&output, "previous").unwrap();

        assert!(assemble(temp_dir.path(), DEFAULT_FILENAME).is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_assemble_missing_input_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = assemble(&missing, DEFAULT_FILENAME).unwrap_err();
        assert!(matches!(err, PrdError::InputDirNotFound(_)));
    }

    #[test]
    fn test_assemble_input_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("masterplan.md");
        fs::write(&file, "Hello").unwrap();

        let err = assemble(&file, DEFAULT_FILENAME).unwrap_err();
        assert!(matches!(err, PrdError::NotADirectory(_)));
    }

    #[test]
    fn test_custom_output_filename() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("design-guidelines.md"), "Design").unwrap();

        let report = assemble(temp_dir.path(), "bundle.md").unwrap();

        assert_eq!(report.output_path, temp_dir.path().join("bundle.md"));
        assert!(temp_dir.path().join("bundle.md").exists());
        assert!(!temp_dir.path().join(DEFAULT_FILENAME).exists());
    }

    #[test]
    fn test_plan_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("masterplan.md"), "Hello").unwrap();
        let assembler = Assembler::new(temp_dir.path());

        let result = assembler.collect().unwrap();
        let report = assembler.plan(&result).unwrap();

        assert!(!report.written);
        assert!(report.bytes > 0);
        assert!(!assembler.output_path().exists());
    }

    #[test]
    fn test_from_config() {
        let output = OutputConfig {
            filename: "combined.md".to_string(),
            atomic: false,
        };
        let assembler = Assembler::from_config("docs", &output);

        assert_eq!(assembler.output_path(), Path::new("docs").join("combined.md"));
    }

    proptest! {
        #[test]
        fn prop_sections_follow_catalog_order(mask in 1u8..32) {
            let present: Vec<usize> = (0..5).filter(|i| mask & (1 << i) != 0).collect();
            // Insert in reverse so source order differs from catalog order
            let mut reversed = present.clone();
            reversed.reverse();
            let result = collect(&source_with(&reversed), &PRD_DOCUMENTS).unwrap();

            let expected: Vec<&str> = present.iter().map(|&i| PRD_DOCUMENTS[i].filename).collect();
            prop_assert_eq!(result.included(), expected);

            let package = result.render().unwrap();
            for &i in &present {
                let heading = format!("\n# {}\n", PRD_DOCUMENTS[i].title);
                prop_assert_eq!(package.matches(&heading).count(), 1);
            }
        }

        #[test]
        fn prop_missing_is_complement(mask in 0u8..32) {
            let present: Vec<usize> = (0..5).filter(|i| mask & (1 << i) != 0).collect();
            let result = collect(&source_with(&present), &PRD_DOCUMENTS).unwrap();

            let expected: Vec<&str> = (0..5)
                .filter(|i| !present.contains(i))
                .map(|i| PRD_DOCUMENTS[i].filename)
                .collect();
            prop_assert_eq!(&result.missing, &expected);
            prop_assert_eq!(result.is_empty(), present.is_empty());
        }

        #[test]
        fn prop_render_is_deterministic(mask in 1u8..32) {
            let present: Vec<usize> = (0..5).filter(|i| mask & (1 << i) != 0).collect();
            let first = collect(&source_with(&present), &PRD_DOCUMENTS).unwrap().render();
            let second = collect(&source_with(&present), &PRD_DOCUMENTS).unwrap().render();
            prop_assert_eq!(first, second);
        }
    }
}

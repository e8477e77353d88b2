//! Assemble Command
//!
//! Resolves configuration, collects the PRD documents from the input
//! directory, reports missing ones, and writes (or plans) the package.

use std::path::PathBuf;

use tracing::debug;

use crate::assembler::{AssemblyReport, Assembler};
use crate::cli::ui::Output;
use crate::config::{Config, ConfigLoader};
use crate::types::{PrdError, Result};

/// Options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    pub input_dir: PathBuf,
    /// Positional output filename; overrides every config source
    pub output_filename: Option<String>,
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub json: bool,
    pub quiet: bool,
}

/// Effective configuration for `input_dir`, with CLI overrides applied
pub fn resolve_config(options: &AssembleOptions) -> Result<Config> {
    let mut config = ConfigLoader::load(Some(&options.input_dir), options.config.as_deref())?;

    if let Some(filename) = &options.output_filename {
        config.output.filename = filename.clone();
        config.validate()?;
    }

    debug!(
        filename = %config.output.filename,
        atomic = config.output.atomic,
        "resolved output settings"
    );
    Ok(config)
}

pub fn run(options: AssembleOptions) -> Result<AssemblyReport> {
    let output = Output::new(options.quiet);
    let config = resolve_config(&options)?;
    let assembler = Assembler::from_config(&options.input_dir, &config.output);

    let result = assembler.collect()?;

    if !options.json
        && let Some(message) = result.missing_message()
    {
        output.warning(&format!("Warning: {}", message));
    }

    let report = if options.dry_run {
        assembler.plan(&result)?
    } else {
        assembler.write(&result)?
    };

    if options.json {
        output.json(&report)?;
    } else if options.dry_run {
        output.info(&format!(
            "Dry run: would write {} bytes to {}",
            report.bytes,
            report.output_path.display()
        ));
        for section in &result.sections {
            output.item(&format!("{} ({})", section.spec.title, section.spec.filename));
        }
    } else {
        output.success(&format!(
            "Assembled PRD package saved to: {}",
            report.output_path.display()
        ));
    }

    Ok(report)
}

/// Print the effective configuration
pub fn show_config(
    input_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    as_json: bool,
) -> Result<()> {
    let loaded = ConfigLoader::load(input_dir.as_deref(), config.as_deref())?;
    let rendered = ConfigLoader::render(&loaded, as_json)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Log an error at a level matching its cause
pub fn log_error(err: &PrdError) {
    if err.is_user_error() {
        debug!(category = %err.category(), "{}", err);
    } else {
        tracing::error!(category = %err.category(), "{}", err);
    }
}

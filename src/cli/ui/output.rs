use console::style;
use serde::Serialize;

use crate::types::Result;

/// User-facing console lines.
///
/// Everything except errors goes to stdout. `quiet` drops success and info
/// lines; warnings and errors are always shown.
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("Error:").red().for_stderr(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    pub fn item(&self, message: &str) {
        if !self.quiet {
            println!("  {}", message);
        }
    }

    /// Pretty-printed JSON, regardless of `quiet`
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(false)
    }
}

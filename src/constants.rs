//! Global Constants
//!
//! Fixed values shared by the assembler, the configuration defaults, and the CLI.

/// Output defaults
pub mod output {
    /// Output filename used when neither the CLI nor the config names one
    pub const DEFAULT_FILENAME: &str = "full-prd-package.md";
}

/// Rendering constants for the packaged document
pub mod render {
    /// Width of the `=` banner surrounding each section title
    pub const BANNER_WIDTH: usize = 60;

    /// Banner character
    pub const BANNER_CHAR: char = '=';

    /// Heading placed at the top of the packaged document
    pub const PREAMBLE_HEADING: &str = "# Complete PRD Package\n\n";

    /// Explanatory lines following the heading
    pub const PREAMBLE_BODY: &str = "This file combines all PRD documents for easy reference.\n\
        For Lovable.dev, use the individual files or the Knowledge Base summary.\n\n";

    /// Separator placed between rendered sections
    pub const SECTION_SEPARATOR: &str = "\n";
}

/// Configuration file locations
pub mod config {
    /// Application directory name under the XDG config home
    pub const APP_DIR: &str = "prdpack";

    /// Global config filename
    pub const GLOBAL_FILE: &str = "config.toml";

    /// Per-input-directory config filename
    pub const PROJECT_FILE: &str = ".prdpack.toml";

    /// Environment variable prefix (e.g. `PRDPACK_OUTPUT_FILENAME`)
    pub const ENV_PREFIX: &str = "PRDPACK_";
}

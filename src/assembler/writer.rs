//! Package Writer
//!
//! Writes the packaged document. In atomic mode the text goes to a temp
//! file in the target directory which is then renamed over the output, so
//! a failed write never leaves a truncated package behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::types::{PrdError, Result};

/// Write `content` to `path`, replacing any existing file.
pub fn write_package(path: &Path, content: &str, atomic: bool) -> Result<()> {
    if atomic {
        write_atomic(path, content)
    } else {
        fs::write(path, content).map_err(|e| PrdError::write(path, e))
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = temp_builder()
        .tempfile_in(parent)
        .map_err(|e| PrdError::write(path, e))?;

    // Replacing a package keeps its mode
    if let Ok(existing) = fs::metadata(path) {
        temp_file
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| PrdError::write(path, e))?;
    }

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| PrdError::write(path, e))?;
    temp_file.flush().map_err(|e| PrdError::write(path, e))?;

    debug!(temp = %temp_file.path().display(), "persisting package");
    temp_file
        .persist(path)
        .map_err(|e| PrdError::write(path, e.error))?;

    Ok(())
}

/// Temp files default to 0600; request 0666 so a new package gets the
/// same umask-filtered mode as a plain create.
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".prdpack");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}

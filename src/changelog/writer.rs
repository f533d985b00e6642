//! Atomic report persistence
//!
//! The report goes to a temporary file next to the destination and is renamed
//! over it once fully written, so a failed run never truncates the previous
//! report.

use std::fs;
#[cfg(unix)]
use std::fs::Permissions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use thiserror::Error;

/// Failure to persist the report
#[derive(Error, Debug)]
#[error("failed to write {}: {source}", .path.display())]
pub struct WriteError {
    /// Destination that could not be written
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Replace the file at `path` with `contents`
///
/// Returns the written path. On error the previous file, if any, is left as it
/// was.
pub fn write_report(path: &Path, contents: &str) -> Result<PathBuf, WriteError> {
    replace_file(path, contents).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

fn replace_file(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = temp_builder().tempfile_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;

    // Keep the mode of the report being replaced
    if let Ok(metadata) = fs::metadata(path) {
        file.as_file().set_permissions(metadata.permissions())?;
    }
    file.as_file().sync_all()?;

    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Temporary file builder creating files the way a plain create would
///
/// Temporary files are private by default; request `0o666` instead so the
/// process umask decides the final mode of a new report.
#[cfg(unix)]
fn temp_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> Builder<'static, 'static> {
    Builder::new()
}

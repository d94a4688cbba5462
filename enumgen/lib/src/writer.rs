//! Persists rendered source over the original file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::error::EnumGenError;

/// Replaces the file at `path` with `contents`.
///
/// The text goes to a temporary file in the same directory which is then
/// renamed over the destination, so a failure leaves the original intact.
/// Symlinks are resolved first and the original permissions are kept.
///
/// ## Errors
/// Returns [`EnumGenError::Write`] if the temporary file cannot be created,
/// written or persisted.
#[instrument(skip_all, fields(path = %path.display(), bytes = contents.len()))]
pub fn write_source(path: &Path, contents: &str) -> Result<(), EnumGenError> {
    let write_error = |source: std::io::Error| EnumGenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let parent = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    debug!("Writing to temporary file");
    let mut temp_file = NamedTempFile::new_in(parent).map_err(write_error)?;
    temp_file
        .write_all(contents.as_bytes())
        .map_err(write_error)?;
    temp_file.as_file().sync_all().map_err(write_error)?;

    if let Ok(metadata) = fs::metadata(&target) {
        temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_error)?;
    }

    debug!("Persisting file atomically");
    temp_file
        .persist(&target)
        .map_err(|error| write_error(error.error))?;

    Ok(())
}

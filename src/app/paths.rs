use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to access {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),
}

/// Returns the path unchanged if it exists on disk.
pub fn verify_path(path: &Path) -> Result<PathBuf, PathError> {
    match fs::metadata(path) {
        Ok(_) => Ok(path.to_path_buf()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(PathError::NotFound(path.to_path_buf())),
        Err(e) => Err(PathError::Io(path.to_path_buf(), e)),
    }
}

/// Get-or-recreate a directory.
///
/// With `force`, an existing tree at `path` is removed first. The directory
/// (and any missing parents) always exists afterwards on success.
pub fn create_directory(path: &Path, force: bool) -> Result<PathBuf, PathError> {
    if force && path.exists() {
        log::debug!("Removing existing directory {}", path.display());
        fs::remove_dir_all(path).map_err(|e| PathError::Io(path.to_path_buf(), e))?;
    }

    fs::create_dir_all(path).map_err(|e| PathError::Io(path.to_path_buf(), e))?;
    Ok(path.to_path_buf())
}

/// Batch policy for per-operation failures: log and carry on.
///
/// A failing directory, walk entry or encoder must never stop the rest of the
/// batch, so the error is reported at warn level and dropped here.
pub fn best_effort<T, E: Display>(what: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{} failed (ignored): {}", what, err);
            None
        }
    }
}

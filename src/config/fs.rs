//! Capability-scoped file access helpers.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use thiserror::Error;

/// Filesystem errors raised by the helpers in this module.
#[derive(Debug, Error)]
pub enum FsError {
    /// The path names no file.
    #[error("path '{0}' must include a file name")]
    MissingFileName(String),
    /// An I/O operation failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl FsError {
    /// Returns whether the error means the file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::NotFound)
    }
}

/// Opens the directory containing `path` and returns it with the file name.
///
/// # Errors
///
/// Returns [`FsError::MissingFileName`] when `path` ends in no file name, or
/// [`FsError::Io`] when the directory cannot be opened.
pub fn open_parent_dir(path: &Utf8Path) -> Result<(Dir, &str), FsError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| FsError::MissingFileName(path.to_string()))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Reads a UTF-8 text file.
///
/// # Errors
///
/// Returns [`FsError`] when the file cannot be opened or read.
pub fn read_text_file(path: &Utf8Path) -> Result<String, FsError> {
    let (dir, file_name) = open_parent_dir(path)?;
    Ok(dir.read_to_string(file_name)?)
}

//! Reading TLE text into lines.
//!
//! Acquisition failures are reported as [SourceError], separately from decode errors, so a
//! missing or unreadable file is distinguished from invalid TLE content.
use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SourceError {
    #[error("Empty file name")]
    EmptyPath,
    #[error("File does not exist: {0:?}")]
    NotFound(PathBuf),
    #[error("Permission denied: {0:?}")]
    PermissionDenied(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read all lines of the file at `path`.
///
/// # Errors
/// [SourceError::EmptyPath] for an empty path, [SourceError::NotFound] or
/// [SourceError::PermissionDenied] if the file cannot be opened for those reasons, and
/// [SourceError::Io] for any other failure, including content that is not UTF-8.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(SourceError::EmptyPath);
    }
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => SourceError::PermissionDenied(path.to_path_buf()),
        _ => SourceError::Io(err),
    })?;
    read_lines_from(BufReader::new(file))
}

/// Read all lines from `reader`. Line terminators (`\n` or `\r\n`) are removed and a missing
/// final terminator is accepted.
///
/// # Errors
/// [SourceError::Io] if reading fails.
pub fn read_lines_from<R: BufRead>(reader: R) -> Result<Vec<String>, SourceError> {
    Ok(reader.lines().collect::<std::io::Result<Vec<String>>>()?)
}

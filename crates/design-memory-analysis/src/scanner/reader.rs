//! UTF-8 text reader with a size guard.

use std::fs;
use std::path::Path;

use design_memory_core::errors::ScanError;

/// Read a file as text. Invalid UTF-8 sequences are replaced rather than
/// rejected: the extractors only pattern-match ASCII syntax.
pub fn read_source(path: &Path, max_file_size: u64) -> Result<String, ScanError> {
    let metadata = fs::metadata(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let size = metadata.len();
    if size > max_file_size {
        return Err(ScanError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max: max_file_size,
        });
    }

    let bytes = fs::read(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Read a file that may legitimately be absent.
///
/// `Ok(None)` when the path does not exist; errors only for files that exist
/// but cannot be read.
pub fn read_optional(path: &Path, max_file_size: u64) -> Result<Option<String>, ScanError> {
    if !path.is_file() {
        return Ok(None);
    }
    read_source(path, max_file_size).map(Some)
}

//! Scanner errors.
//!
//! These never abort an extraction: every caller logs them and degrades the
//! affected field to its empty value.

use std::path::PathBuf;

use super::error_code::{self, DesignErrorCode};

/// Errors that can occur while reading a file from the scanned tree.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File too large: {path} ({size} bytes, max {max})")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },
}

impl DesignErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileTooLarge { .. } => error_code::FILE_TOO_LARGE,
            _ => error_code::SCAN_ERROR,
        }
    }
}

//! Extraction errors.
//!
//! Only structural failures surface here. Everything that goes wrong for a
//! single file degrades that file's contribution instead.

use std::path::PathBuf;

use super::error_code::{self, DesignErrorCode};
use super::ConfigError;

/// Errors that abort an extraction run without producing a result.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Repository path does not exist: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DesignErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootNotFound { .. } => error_code::ROOT_NOT_FOUND,
            Self::Config(e) => e.error_code(),
        }
    }
}

//! Tests for the design-memory error handling system.

use std::path::PathBuf;

use design_memory_core::errors::error_code::{self, DesignErrorCode};
use design_memory_core::errors::*;

#[test]
fn test_error_codes() {
    let root = ExtractError::RootNotFound {
        path: PathBuf::from("/nope"),
    };
    assert_eq!(root.error_code(), error_code::ROOT_NOT_FOUND);

    let too_large = ScanError::FileTooLarge {
        path: PathBuf::from("big.tsx"),
        size: 10,
        max: 5,
    };
    assert_eq!(too_large.error_code(), error_code::FILE_TOO_LARGE);

    let io = ScanError::Io {
        path: PathBuf::from("gone.ts"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert_eq!(io.error_code(), error_code::SCAN_ERROR);
}

#[test]
fn test_config_error_converts_into_extract_error() {
    let config = ConfigError::ValidationFailed {
        field: "scan.max_components".into(),
        message: "must be greater than 0".into(),
    };
    let err: ExtractError = config.into();
    assert!(matches!(err, ExtractError::Config(_)));
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_coded_string_format() {
    let err = ExtractError::RootNotFound {
        path: PathBuf::from("/tmp/missing"),
    };
    assert_eq!(
        err.coded_string(),
        "[ROOT_NOT_FOUND] Repository path does not exist: /tmp/missing"
    );
}

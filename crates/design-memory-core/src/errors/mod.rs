//! Error handling for design-memory.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod extract_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::DesignErrorCode;
pub use extract_error::ExtractError;
pub use scan_error::ScanError;

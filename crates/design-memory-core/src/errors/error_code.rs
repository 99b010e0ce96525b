//! DesignErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so callers outside Rust (CLI exit
/// reporting, HTTP wrappers) can match on a code instead of a message.
pub trait DesignErrorCode {
    /// Returns the error code string (e.g., "ROOT_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const ROOT_NOT_FOUND: &str = "ROOT_NOT_FOUND";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const FILE_TOO_LARGE: &str = "FILE_TOO_LARGE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

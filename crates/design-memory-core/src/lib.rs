//! design-memory-core: shared foundations for the design-memory extractor.
//!
//! Errors, layered configuration, tracing setup and the constants every
//! extraction stage falls back to.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::DesignMemoryConfig;
pub use errors::{ConfigError, DesignErrorCode, ExtractError, ScanError};

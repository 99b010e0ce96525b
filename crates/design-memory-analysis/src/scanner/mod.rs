//! Scanner subsystem: read-only discovery and reading of source files.
//!
//! Every extractor goes through here, so the scanned tree is never written and
//! per-file failures surface as `ScanError` values the caller can drop.

pub mod reader;
pub mod walker;

pub use reader::{read_optional, read_source};
pub use walker::SourceWalker;

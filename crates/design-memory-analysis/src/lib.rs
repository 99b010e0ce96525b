//! design-memory-analysis: the extraction pipeline.
//!
//! Scanner → profiler → token, config and component extractors → pattern
//! detector → aggregator. Every stage reads the scanned tree and never
//! writes to it.

pub mod components;
pub mod memory;
pub mod patterns;
pub mod profiler;
pub mod scanner;
pub mod tailwind;
pub mod tokens;

pub use components::{ComponentKind, ComponentSpec};
pub use memory::{extract_design_system, extract_design_system_with_config, DesignMemory};
pub use patterns::DetectedPatterns;
pub use profiler::ProjectProfile;

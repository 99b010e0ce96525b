//! Configuration system for design-memory.
//! TOML-based, layered resolution: CLI > env > explicit file > user > defaults.

pub mod design_memory_config;
pub mod scan_config;
pub mod tokens_config;

pub use design_memory_config::{CliOverrides, DesignMemoryConfig};
pub use scan_config::ScanConfig;
pub use tokens_config::TokensConfig;

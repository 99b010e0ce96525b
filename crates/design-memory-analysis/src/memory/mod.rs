//! Aggregator: assembles the design memory document.

pub mod aggregator;
pub mod types;

pub use aggregator::{extract_design_system, extract_design_system_with_config};
pub use types::{
    AnimationSystem, BorderRadiusSystem, ColorSystem, DesignMemory, DesignTokens, Instructions,
    Metadata, ShadowSystem, SpacingSystem, TypographySystem, Utilities,
};

//! Design memory document types.
//!
//! Field names serialize in camelCase: this is the shape downstream
//! generators consume.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::components::ComponentSpec;
use crate::patterns::DetectedPatterns;
use crate::tokens::{ColorEncoding, Keyframe, VariableMap};

/// Root output of one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignMemory {
    pub metadata: Metadata,
    pub design_tokens: DesignTokens,
    /// Discovery order, capped.
    pub components: Vec<ComponentSpec>,
    pub patterns: DetectedPatterns,
    pub utilities: Utilities,
    pub instructions: Instructions,
}

impl DesignMemory {
    /// Look up a component by its inferred name.
    pub fn component(&self, name: &str) -> Option<&ComponentSpec> {
        self.components.iter().find(|c| c.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Final path component of the scanned root.
    pub project_name: String,
    pub extracted_at: DateTime<Utc>,
    pub framework: String,
    pub styling_library: String,
    /// Absolute path of the scanned root.
    pub source_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub colors: ColorSystem,
    pub typography: TypographySystem,
    pub spacing: SpacingSystem,
    pub border_radius: BorderRadiusSystem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<ShadowSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<AnimationSystem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSystem {
    pub system: ColorEncoding,
    pub light: VariableMap,
    pub dark: VariableMap,
    pub custom: BTreeMap<String, VariableMap>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySystem {
    /// Family name to ordered font stack.
    pub font_families: BTreeMap<String, Vec<String>>,
    /// Semantic role to utility classes. Fixed, not scanned.
    pub scales: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingSystem {
    pub base: String,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRadiusSystem {
    pub base: String,
    pub lg: String,
    pub md: String,
    pub sm: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowSystem {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSystem {
    pub durations: BTreeMap<String, String>,
    pub easings: BTreeMap<String, String>,
    pub keyframes: BTreeMap<String, Keyframe>,
    /// Named animations declared in the styling config.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub named: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utilities {
    /// Source of the class-merging helper, when one was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cn_function: Option<String>,
    pub common_hooks: Vec<String>,
}

/// Fixed setup and usage guidance shipped with every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructions {
    pub setup: Vec<String>,
    pub usage: Vec<String>,
}

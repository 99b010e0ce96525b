//! Pattern record types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A class-based visual idiom (glassmorphism, gradient text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePattern {
    pub description: String,
    pub base_classes: String,
    pub variations: BTreeMap<String, String>,
    pub usage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationPattern {
    pub description: String,
    /// Library the template is written against.
    pub implementation: String,
    pub template: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPattern {
    pub structure: String,
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Patterns found in one run. Absent keys were not detected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPatterns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glassmorphism: Option<StylePattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradients: Option<StylePattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<AnimationPattern>,
    /// Layout name (`hero`, `navbar`, `featureGrid`) to record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layouts: Option<BTreeMap<String, LayoutPattern>>,
}

impl DetectedPatterns {
    pub fn is_empty(&self) -> bool {
        self.glassmorphism.is_none()
            && self.gradients.is_none()
            && self.animations.is_none()
            && self.layouts.is_none()
    }

    /// Names of the detected top-level patterns.
    pub fn names(&self) -> Vec<&'static str> {
        [
            ("glassmorphism", self.glassmorphism.is_some()),
            ("gradients", self.gradients.is_some()),
            ("animations", self.animations.is_some()),
            ("layouts", self.layouts.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

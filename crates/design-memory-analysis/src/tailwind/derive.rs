//! Token systems derived from the Tailwind config, with fixed fallbacks.

use std::collections::BTreeMap;

use design_memory_core::constants::DEFAULT_RADIUS;

use super::types::TailwindConfig;
use crate::memory::types::{BorderRadiusSystem, ShadowSystem, TypographySystem};

const DEFAULT_FONT_FAMILY: (&str, &[&str]) = ("sans", &["system-ui", "sans-serif"]);

/// Semantic text roles. Not read from the project.
const TYPE_SCALES: &[(&str, &str)] = &[
    ("h1", "text-6xl md:text-8xl font-bold tracking-tight"),
    ("h2", "text-4xl font-bold"),
    ("h3", "text-2xl font-semibold"),
    ("body", "text-base"),
    ("small", "text-sm"),
    ("muted", "text-sm text-muted-foreground"),
];

const RADIUS_LG: &str = "var(--radius)";
const RADIUS_MD: &str = "calc(var(--radius) - 2px)";
const RADIUS_SM: &str = "calc(var(--radius) - 4px)";

// Tailwind's stock box shadows.
const SHADOW_SM: &str = "0 1px 2px 0 rgb(0 0 0 / 0.05)";
const SHADOW_MD: &str = "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)";
const SHADOW_LG: &str = "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)";

/// Seeded `sans` stack, overwritten by config entries of the same name.
pub fn extract_typography(config: Option<&TailwindConfig>) -> TypographySystem {
    let (name, stack) = DEFAULT_FONT_FAMILY;
    let mut font_families = BTreeMap::new();
    font_families.insert(
        name.to_string(),
        stack.iter().map(|s| s.to_string()).collect(),
    );
    if let Some(config) = config {
        font_families.extend(config.font_family.clone());
    }

    TypographySystem {
        font_families,
        scales: TYPE_SCALES
            .iter()
            .map(|(role, classes)| (role.to_string(), classes.to_string()))
            .collect(),
    }
}

pub fn extract_border_radius(config: Option<&TailwindConfig>) -> BorderRadiusSystem {
    let declared = |size: &str| config.and_then(|c| c.border_radius.get(size)).cloned();

    BorderRadiusSystem {
        base: declared("lg").unwrap_or_else(|| DEFAULT_RADIUS.to_string()),
        lg: declared("lg").unwrap_or_else(|| RADIUS_LG.to_string()),
        md: declared("md").unwrap_or_else(|| RADIUS_MD.to_string()),
        sm: declared("sm").unwrap_or_else(|| RADIUS_SM.to_string()),
    }
}

/// `None` unless the config declares a `boxShadow` block.
pub fn extract_shadows(config: Option<&TailwindConfig>) -> Option<ShadowSystem> {
    let shadows = &config?.box_shadow;
    if shadows.is_empty() {
        return None;
    }
    let pick = |size: &str, stock: &str| shadows.get(size).cloned().unwrap_or_else(|| stock.to_string());

    Some(ShadowSystem {
        sm: pick("sm", SHADOW_SM),
        md: pick("md", SHADOW_MD),
        lg: pick("lg", SHADOW_LG),
    })
}

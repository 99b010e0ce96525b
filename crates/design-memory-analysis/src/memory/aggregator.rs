//! One extraction run: profile, tokens, config, components, patterns.
//!
//! Stages run in sequence and each one owns its reads. Only a missing root
//! is fatal; every other failure shrinks the affected section.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use design_memory_core::constants::{COMMON_HOOKS, SPACING_BASE, SPACING_SCALE};
use design_memory_core::errors::ExtractError;
use design_memory_core::DesignMemoryConfig;
use tracing::{debug, info, warn};

use super::types::{
    AnimationSystem, ColorSystem, DesignMemory, DesignTokens, Instructions, Metadata,
    SpacingSystem, Utilities,
};
use crate::components::ComponentExtractor;
use crate::patterns::PatternDetector;
use crate::profiler::profile_project;
use crate::scanner::read_optional;
use crate::tailwind::{
    extract_border_radius, extract_shadows, extract_typography, find_tailwind_config,
};
use crate::tokens::{detect_color_system, Keyframe, TokenExtractor};

const DURATIONS: &[(&str, &str)] = &[("fast", "0.2s"), ("normal", "0.3s"), ("slow", "0.5s")];

const EASINGS: &[(&str, &str)] = &[
    ("easeInOut", "ease-in-out"),
    ("easeOut", "ease-out"),
    ("easeIn", "ease-in"),
];

const SETUP_STEPS: &[&str] = &[
    "1. Copy design tokens to globals.css",
    "2. Install required dependencies (framer-motion, class-variance-authority, tailwind-merge, clsx)",
    "3. Create lib/utils.ts with cn function",
    "4. Generate components from templates",
    "5. Apply patterns using provided examples",
];

const USAGE_RULES: &[&str] = &[
    "Always use components from this design system",
    "Apply patterns consistently (glassmorphism, gradients, animations)",
    "Use design tokens for colors, spacing, typography",
    "Follow layout templates for common page structures",
    "Maintain the same visual language across all pages",
];

/// Marker identifying the class-merging helper in a utils file.
const CN_MARKER: &str = "function cn";

/// Extract with compiled defaults.
pub fn extract_design_system(root: impl AsRef<Path>) -> Result<DesignMemory, ExtractError> {
    extract_design_system_with_config(root, &DesignMemoryConfig::default())
}

pub fn extract_design_system_with_config(
    root: impl AsRef<Path>,
    config: &DesignMemoryConfig,
) -> Result<DesignMemory, ExtractError> {
    DesignMemoryConfig::validate(config)?;
    let root = resolve_root(root.as_ref())?;
    let max_file_size = config.scan.effective_max_file_size();
    info!(root = %root.display(), "extracting design memory");

    let profile = profile_project(&root, max_file_size);
    debug!(framework = %profile.framework, styling = %profile.styling_library, "project profiled");

    let stylesheet =
        TokenExtractor::new(&root, &config.tokens.effective_stylesheets(), max_file_size).extract();
    let color_system = detect_color_system(&stylesheet.variables);

    let tailwind = find_tailwind_config(
        &root,
        &config.tokens.effective_tailwind_configs(),
        max_file_size,
    );
    let tailwind = tailwind.as_ref();

    let mut components = ComponentExtractor::new(&root, &config.scan).extract_all();
    let cap = config.scan.effective_max_components();
    if components.len() > cap {
        debug!(found = components.len(), cap, "truncating component list");
        components.truncate(cap);
    }

    let patterns = PatternDetector::new(&root, &config.scan).detect();

    let cn_function = find_cn_function(&root, &config.tokens.effective_utils_files(), max_file_size);

    let animations = build_animations(
        stylesheet.keyframes,
        tailwind.map(|t| t.animation.clone()).unwrap_or_default(),
    );

    let variables = stylesheet.variables;
    let memory = DesignMemory {
        metadata: Metadata {
            project_name: project_name(&root),
            extracted_at: Utc::now(),
            framework: profile.framework,
            styling_library: profile.styling_library,
            source_path: root.display().to_string(),
        },
        design_tokens: DesignTokens {
            colors: ColorSystem {
                system: color_system,
                light: variables.light,
                dark: variables.dark,
                custom: variables.custom,
            },
            typography: extract_typography(tailwind),
            spacing: SpacingSystem {
                base: SPACING_BASE.to_string(),
                scale: SPACING_SCALE.to_vec(),
            },
            border_radius: extract_border_radius(tailwind),
            shadows: extract_shadows(tailwind),
            animations,
        },
        components,
        patterns,
        utilities: Utilities {
            cn_function,
            common_hooks: COMMON_HOOKS.iter().map(|h| h.to_string()).collect(),
        },
        instructions: Instructions {
            setup: SETUP_STEPS.iter().map(|s| s.to_string()).collect(),
            usage: USAGE_RULES.iter().map(|s| s.to_string()).collect(),
        },
    };

    info!(
        project = %memory.metadata.project_name,
        colors = memory.design_tokens.colors.light.len(),
        components = memory.components.len(),
        patterns = ?memory.patterns.names(),
        "extraction complete"
    );
    Ok(memory)
}

/// Absolute form of `root`. The only fatal check of a run.
fn resolve_root(root: &Path) -> Result<PathBuf, ExtractError> {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    if !absolute.exists() {
        return Err(ExtractError::RootNotFound { path: absolute });
    }
    Ok(absolute.canonicalize().unwrap_or(absolute))
}

fn project_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// `None` when no keyframes were found.
fn build_animations(
    keyframes: BTreeMap<String, Keyframe>,
    named: BTreeMap<String, String>,
) -> Option<AnimationSystem> {
    if keyframes.is_empty() {
        return None;
    }
    Some(AnimationSystem {
        durations: table(DURATIONS),
        easings: table(EASINGS),
        keyframes,
        named,
    })
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Source of the first utils file that declares the `cn` helper.
fn find_cn_function(root: &Path, candidates: &[String], max_file_size: u64) -> Option<String> {
    candidates.iter().find_map(|candidate| {
        let path = root.join(candidate);
        match read_optional(&path, max_file_size) {
            Ok(Some(content)) if content.contains(CN_MARKER) => Some(content),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "utils file unreadable");
                None
            }
        }
    })
}

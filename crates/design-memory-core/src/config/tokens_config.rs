//! Token source configuration.

use serde::{Deserialize, Serialize};

use super::scan_config::or_defaults;
use crate::constants::{DEFAULT_STYLESHEETS, DEFAULT_TAILWIND_CONFIGS, DEFAULT_UTILS_FILES};

/// Where the token, config and utility extractors look, relative to the root.
/// Each list is tried in order and the first hit wins.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TokensConfig {
    pub stylesheets: Vec<String>,
    pub tailwind_configs: Vec<String>,
    pub utils_files: Vec<String>,
}

impl TokensConfig {
    pub fn effective_stylesheets(&self) -> Vec<String> {
        or_defaults(&self.stylesheets, DEFAULT_STYLESHEETS)
    }

    pub fn effective_tailwind_configs(&self) -> Vec<String> {
        or_defaults(&self.tailwind_configs, DEFAULT_TAILWIND_CONFIGS)
    }

    pub fn effective_utils_files(&self) -> Vec<String> {
        or_defaults(&self.utils_files, DEFAULT_UTILS_FILES)
    }
}

//! Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMPONENT_DIRS, DEFAULT_MAX_COMPONENTS, DEFAULT_MAX_FILE_SIZE,
    DEFAULT_MIN_COMPONENT_CHARS, DEFAULT_PATTERN_DIRS, DEFAULT_SOURCE_EXTENSIONS,
};

/// Configuration for the file walker and the component extractor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Component directories, relative to the scanned root, in walk order.
    pub component_dirs: Vec<String>,
    /// Directories concatenated for pattern detection, in walk order.
    pub pattern_dirs: Vec<String>,
    /// Source file extensions (without the dot).
    pub source_extensions: Vec<String>,
    /// Cap on the component list. Default: 20.
    pub max_components: Option<usize>,
    /// Minimum length of a component file outside `ui/`. Default: 200.
    pub min_component_chars: Option<usize>,
    /// Files larger than this are skipped. Default: 1MB.
    pub max_file_size: Option<u64>,
}

impl ScanConfig {
    pub fn effective_component_dirs(&self) -> Vec<String> {
        or_defaults(&self.component_dirs, DEFAULT_COMPONENT_DIRS)
    }

    pub fn effective_pattern_dirs(&self) -> Vec<String> {
        or_defaults(&self.pattern_dirs, DEFAULT_PATTERN_DIRS)
    }

    pub fn effective_source_extensions(&self) -> Vec<String> {
        or_defaults(&self.source_extensions, DEFAULT_SOURCE_EXTENSIONS)
    }

    /// Returns the effective component cap, defaulting to 20.
    pub fn effective_max_components(&self) -> usize {
        self.max_components.unwrap_or(DEFAULT_MAX_COMPONENTS)
    }

    /// Returns the effective minimum component length, defaulting to 200.
    pub fn effective_min_component_chars(&self) -> usize {
        self.min_component_chars.unwrap_or(DEFAULT_MIN_COMPONENT_CHARS)
    }

    /// Returns the effective maximum file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }
}

pub(crate) fn or_defaults(values: &[String], defaults: &[&str]) -> Vec<String> {
    if values.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        values.to_vec()
    }
}

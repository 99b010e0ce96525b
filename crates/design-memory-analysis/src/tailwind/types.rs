//! Values recovered from a Tailwind config file.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// The subset of `theme`/`theme.extend` the extractor understands.
///
/// Only literal values survive; computed entries are dropped during parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TailwindConfig {
    /// File the values came from. `None` when parsed from a string.
    pub source: Option<PathBuf>,
    pub font_family: BTreeMap<String, Vec<String>>,
    pub border_radius: BTreeMap<String, String>,
    pub animation: BTreeMap<String, String>,
    pub box_shadow: BTreeMap<String, String>,
}

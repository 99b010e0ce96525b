//! Component metadata types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Variant axis name to option name to utility classes.
pub type VariantAxes = BTreeMap<String, BTreeMap<String, String>>;

/// Structural role inferred from content keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Interactive,
    Layout,
    #[default]
    Display,
    Form,
}

impl ComponentKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Interactive => "interactive",
            Self::Layout => "layout",
            Self::Display => "display",
            Self::Form => "form",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One accepted component source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Path relative to the scanned root, `/`-separated.
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<VariantAxes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_classes: Option<String>,
    /// Prop name to declared type text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<BTreeMap<String, String>>,
    /// Verbatim file source.
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_components: Option<Vec<String>>,
}

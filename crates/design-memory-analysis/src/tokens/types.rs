//! Token types.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Variable name (without the leading `--`) to its raw CSS value.
pub type VariableMap = BTreeMap<String, String>;

/// How color values are written in the theme. Inferred, never declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorEncoding {
    /// Bare `H S% L%` triplets, the shadcn/Tailwind convention.
    #[default]
    Hsl,
    Rgb,
    Hex,
}

/// Custom properties grouped by theme selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariables {
    /// Declared under `:root`.
    pub light: VariableMap,
    /// Declared under `.dark`.
    pub dark: VariableMap,
    /// Any other single-class block, keyed by class name.
    pub custom: BTreeMap<String, VariableMap>,
    /// First variable declared under `:root`; its value drives color inference.
    pub first_light_key: Option<String>,
}

impl CssVariables {
    /// The value the color-encoding inference samples.
    pub fn light_sample(&self) -> Option<&str> {
        self.first_light_key
            .as_deref()
            .and_then(|key| self.light.get(key))
            .map(String::as_str)
    }
}

/// One `@keyframes` rule with its raw, unparsed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyframe {
    pub name: String,
    pub keyframes: String,
}

/// Everything recovered from one stylesheet.
#[derive(Debug, Clone, Default)]
pub struct StylesheetTokens {
    /// The stylesheet actually read, if any.
    pub source: Option<PathBuf>,
    pub variables: CssVariables,
    pub keyframes: BTreeMap<String, Keyframe>,
}

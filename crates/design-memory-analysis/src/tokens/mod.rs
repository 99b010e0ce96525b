//! Token extractor: CSS custom properties and `@keyframes` from the global stylesheet.

pub mod extractor;
pub mod types;

pub use extractor::{detect_color_system, extract_css_variables, extract_keyframes, TokenExtractor};
pub use types::{ColorEncoding, CssVariables, Keyframe, StylesheetTokens, VariableMap};

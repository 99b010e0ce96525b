//! Regex-based recovery of theme variables and keyframes.
//!
//! Blocks are matched up to their first `}`. Nested rules inside a theme or
//! keyframe block truncate the capture; that is an accepted limitation.
//! Keyframe names match `\w+`, so hyphenated names such as `accordion-down`
//! are not captured.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use super::types::{ColorEncoding, CssVariables, Keyframe, StylesheetTokens, VariableMap};
use crate::scanner::read_optional;

static ROOT_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r":root\s*\{([^}]+)\}").unwrap());

static DARK_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.dark\s*\{([^}]+)\}").unwrap());

static CLASS_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.(\w+)\s*\{([^}]+)\}").unwrap());

/// The last declaration in a block may omit its `;`.
static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--([^:]+):\s*([^;]+)(?:;|$)").unwrap());

static KEYFRAMES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@keyframes\s+(\w+)\s*\{([^}]+)\}").unwrap());

static HSL_TRIPLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s+\d+%\s+\d+%$").unwrap());

/// Class names that are never treated as custom themes.
const RESERVED_THEME_NAMES: &[&str] = &["dark", "root"];

/// Color-encoding rules, checked in order against the sampled value.
const COLOR_RULES: &[(fn(&str) -> bool, ColorEncoding)] = &[
    (is_hsl_triplet, ColorEncoding::Hsl),
    (is_rgb_function, ColorEncoding::Rgb),
    (is_hex_literal, ColorEncoding::Hex),
];

fn is_hsl_triplet(value: &str) -> bool {
    HSL_TRIPLET.is_match(value)
}

fn is_rgb_function(value: &str) -> bool {
    value.starts_with("rgb")
}

fn is_hex_literal(value: &str) -> bool {
    value.starts_with('#')
}

/// Reads the first existing stylesheet among a list of candidates.
pub struct TokenExtractor {
    candidates: Vec<PathBuf>,
    max_file_size: u64,
}

impl TokenExtractor {
    /// `candidates` are relative to `root` and tried in order.
    pub fn new(root: &Path, candidates: &[String], max_file_size: u64) -> Self {
        Self {
            candidates: candidates.iter().map(|c| root.join(c)).collect(),
            max_file_size,
        }
    }

    /// Extract tokens from the first candidate that exists. All-empty when
    /// none does or the chosen one cannot be read.
    pub fn extract(&self) -> StylesheetTokens {
        let Some(path) = self.candidates.iter().find(|p| p.is_file()) else {
            debug!("no global stylesheet found");
            return StylesheetTokens::default();
        };
        Self::extract_file(path, self.max_file_size)
    }

    /// Extract tokens from a single stylesheet path.
    pub fn extract_file(path: &Path, max_file_size: u64) -> StylesheetTokens {
        let content = match read_optional(path, max_file_size) {
            Ok(Some(content)) => content,
            Ok(None) => return StylesheetTokens::default(),
            Err(e) => {
                warn!(error = %e, "stylesheet unreadable");
                return StylesheetTokens::default();
            }
        };

        let variables = extract_css_variables(&content);
        let keyframes = extract_keyframes(&content);
        info!(
            path = %path.display(),
            light = variables.light.len(),
            dark = variables.dark.len(),
            custom_themes = variables.custom.len(),
            keyframes = keyframes.len(),
            "extracted stylesheet tokens"
        );

        StylesheetTokens {
            source: Some(path.to_path_buf()),
            variables,
            keyframes,
        }
    }
}

/// Split a stylesheet into light, dark and custom theme variables.
pub fn extract_css_variables(content: &str) -> CssVariables {
    let mut variables = CssVariables::default();

    if let Some(block) = ROOT_BLOCK.captures(content) {
        variables.first_light_key = collect_declarations(&block[1], &mut variables.light);
    }

    if let Some(block) = DARK_BLOCK.captures(content) {
        collect_declarations(&block[1], &mut variables.dark);
    }

    for block in CLASS_BLOCK.captures_iter(content) {
        let theme = &block[1];
        if RESERVED_THEME_NAMES.contains(&theme) {
            continue;
        }
        let entry = variables.custom.entry(theme.to_string()).or_default();
        collect_declarations(&block[2], entry);
    }

    variables
}

/// Insert every `--key: value;` in `block` into `into` (last one wins).
/// Returns the first key declared.
fn collect_declarations(block: &str, into: &mut VariableMap) -> Option<String> {
    let mut first = None;
    for decl in DECLARATION.captures_iter(block) {
        let key = decl[1].trim().to_string();
        let value = decl[2].trim().to_string();
        if first.is_none() {
            first = Some(key.clone());
        }
        into.insert(key, value);
    }
    first
}

/// Infer the color encoding from the first light-theme value. Defaults to HSL.
pub fn detect_color_system(variables: &CssVariables) -> ColorEncoding {
    let sample = variables.light_sample().unwrap_or("");
    COLOR_RULES
        .iter()
        .find(|(matches, _)| matches(sample))
        .map(|(_, encoding)| *encoding)
        .unwrap_or_default()
}

/// Capture every `@keyframes name { ... }` body up to its first `}`.
pub fn extract_keyframes(content: &str) -> BTreeMap<String, Keyframe> {
    KEYFRAMES
        .captures_iter(content)
        .map(|cap| {
            let name = cap[1].to_string();
            let keyframe = Keyframe {
                name: name.clone(),
                keyframes: cap[2].to_string(),
            };
            (name, keyframe)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOBALS: &str = r#"
@tailwind base;

:root {
  --background: 0 0% 100%;
  --foreground: 240 10% 3.9%;
  --radius: 0.75rem;
}

.dark {
  --background: 240 10% 3.9%;
  --foreground: 0 0% 98%;
}

.violet {
  --primary: 262 83% 58%;
}

.container {
  padding: 2rem;
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
}

@keyframes shimmer {
  from { background-position: 0 0; }
}
"#;

    #[test]
    fn test_light_dark_and_custom_blocks() {
        let vars = extract_css_variables(GLOBALS);
        assert_eq!(vars.light["background"], "0 0% 100%");
        assert_eq!(vars.light["radius"], "0.75rem");
        assert_eq!(vars.dark["foreground"], "0 0% 98%");
        assert_eq!(vars.custom["violet"]["primary"], "262 83% 58%");
        assert!(!vars.custom.contains_key("dark"));
        // Any single-class block becomes a theme entry, even without variables.
        assert!(vars.custom["container"].is_empty());
    }

    #[test]
    fn test_unterminated_last_declaration() {
        let vars = extract_css_variables(":root{--bg: 0 0% 100%}\n.dark{--bg: 0 0% 0%; --fg: 0 0% 100%}");
        assert_eq!(vars.light["bg"], "0 0% 100%");
        assert_eq!(vars.dark["bg"], "0 0% 0%");
        assert_eq!(vars.dark["fg"], "0 0% 100%");
    }

    #[test]
    fn test_last_declaration_wins() {
        let vars = extract_css_variables(":root { --bg: #fff; --bg: #000; }");
        assert_eq!(vars.light.len(), 1);
        assert_eq!(vars.light["bg"], "#000");
    }

    #[test]
    fn test_only_first_root_block_is_read() {
        let vars = extract_css_variables(":root { --a: 1; }\n:root { --b: 2; }");
        assert!(vars.light.contains_key("a"));
        assert!(!vars.light.contains_key("b"));
    }

    #[test]
    fn test_color_inference_samples_first_declared_value() {
        let vars = extract_css_variables(":root { --z: #ffffff; --a: 0 0% 100%; }");
        assert_eq!(detect_color_system(&vars), ColorEncoding::Hex);

        let vars = extract_css_variables(":root { --bg: 0 0% 100%; }");
        assert_eq!(detect_color_system(&vars), ColorEncoding::Hsl);

        let vars = extract_css_variables(":root { --bg: rgba(0, 0, 0, 0.5); }");
        assert_eq!(detect_color_system(&vars), ColorEncoding::Rgb);
    }

    #[test]
    fn test_color_inference_defaults_to_hsl() {
        assert_eq!(detect_color_system(&CssVariables::default()), ColorEncoding::Hsl);

        let vars = extract_css_variables(":root { --font: Inter; }");
        assert_eq!(detect_color_system(&vars), ColorEncoding::Hsl);
    }

    #[test]
    fn test_keyframes_stop_at_first_closing_brace() {
        let frames = extract_keyframes(GLOBALS);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames["float"].name, "float");
        assert_eq!(
            frames["float"].keyframes.trim(),
            "0%, 100% { transform: translateY(0);"
        );
        assert!(frames.contains_key("shimmer"));
    }

    #[test]
    fn test_hyphenated_keyframe_names_are_skipped() {
        let frames = extract_keyframes(
            "@keyframes accordion-down { from { height: 0 } }\n@keyframes spin { to { rotate: 1turn } }",
        );
        assert!(!frames.contains_key("accordion-down"));
        assert!(!frames.contains_key("accordion"));
        assert!(frames.contains_key("spin"));
    }

    #[test]
    fn test_missing_stylesheet_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let tokens = TokenExtractor::new(dir.path(), &["app/globals.css".to_string()], 1024)
            .extract();
        assert!(tokens.source.is_none());
        assert!(tokens.variables.light.is_empty());
        assert!(tokens.keyframes.is_empty());
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("src/app")).unwrap();
        std::fs::write(dir.path().join("src/app/globals.css"), ":root { --bg: #111; }").unwrap();

        let candidates = vec!["app/globals.css".to_string(), "src/app/globals.css".to_string()];
        let tokens = TokenExtractor::new(dir.path(), &candidates, 1024).extract();
        assert_eq!(tokens.variables.light["bg"], "#111");
        assert!(tokens.source.unwrap().ends_with("src/app/globals.css"));
    }
}

//! Regex-based Tailwind config parsing.
//!
//! The config is JavaScript, so nothing here evaluates it. Each section is
//! found by key, read up to its first `}` and split into one-level entries.
//! Entries whose value is not a literal are skipped.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, info, warn};

use super::types::TailwindConfig;
use crate::scanner::read_optional;

static FONT_FAMILY_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"fontFamily:\s*\{([^}]+)\}").unwrap());

static BORDER_RADIUS_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"borderRadius:\s*\{([^}]+)\}").unwrap());

static ANIMATION_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"animation:\s*\{([^}]+)\}").unwrap());

static BOX_SHADOW_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"boxShadow:\s*\{([^}]+)\}").unwrap());

/// `name: [a, b, ...]`, the key optionally quoted.
static FONT_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']?([\w-]+)["']?\s*:\s*\[([^\]]*)\]"#).unwrap());

/// `name: value` where value is a quoted string or anything up to `,`/`}`.
static FLAT_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"["']?([\w-]+)["']?\s*:\s*(?:"([^"]*)"|'([^']*)'|`([^`]*)`|([^,}\n]+))"#)
        .unwrap()
});

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").unwrap());

/// Find and parse the first readable config among `candidates` (relative to
/// `root`, tried in order). `None` when no candidate can be read.
pub fn find_tailwind_config(
    root: &Path,
    candidates: &[String],
    max_file_size: u64,
) -> Option<TailwindConfig> {
    for candidate in candidates {
        let path = root.join(candidate);
        match read_optional(&path, max_file_size) {
            Ok(Some(content)) => {
                let mut config = parse_tailwind_config(&content);
                config.source = Some(path.clone());
                info!(
                    path = %path.display(),
                    font_families = config.font_family.len(),
                    radii = config.border_radius.len(),
                    animations = config.animation.len(),
                    "parsed tailwind config"
                );
                return Some(config);
            }
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "failed to load tailwind config");
                continue;
            }
        }
    }
    debug!("no tailwind config found");
    None
}

/// Parse the sections the extractor understands out of config source text.
pub fn parse_tailwind_config(content: &str) -> TailwindConfig {
    let mut config = TailwindConfig::default();

    if let Some(block) = FONT_FAMILY_BLOCK.captures(content) {
        for entry in FONT_ENTRY.captures_iter(&block[1]) {
            let name = &entry[1];
            match parse_font_stack(&entry[2]) {
                Some(stack) => {
                    config.font_family.insert(name.to_string(), stack);
                }
                None => debug!(font = name, "skipping non-literal font stack"),
            }
        }
    }

    config.border_radius = parse_flat_section(&BORDER_RADIUS_BLOCK, content);
    config.animation = parse_flat_section(&ANIMATION_BLOCK, content);
    config.box_shadow = parse_flat_section(&BOX_SHADOW_BLOCK, content);

    config
}

/// Split an array body on commas. Every item must be a quoted string;
/// otherwise the whole stack is rejected.
fn parse_font_stack(list: &str) -> Option<Vec<String>> {
    let mut stack = Vec::new();
    for item in list.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        stack.push(unquote(item)?.to_string());
    }
    if stack.is_empty() {
        None
    } else {
        Some(stack)
    }
}

fn parse_flat_section(block: &Regex, content: &str) -> BTreeMap<String, String> {
    let Some(section) = block.captures(content) else {
        return BTreeMap::new();
    };

    FLAT_ENTRY
        .captures_iter(&section[1])
        .filter_map(|entry| {
            let name = entry[1].to_string();
            match literal_value(&entry) {
                Some(value) => Some((name, value)),
                None => {
                    debug!(entry = %name, "skipping non-literal config value");
                    None
                }
            }
        })
        .collect()
}

/// The quoted alternatives, or a bare number. Anything else is an expression.
fn literal_value(entry: &Captures<'_>) -> Option<String> {
    if let Some(quoted) = entry.get(2).or_else(|| entry.get(3)).or_else(|| entry.get(4)) {
        return Some(quoted.as_str().to_string());
    }
    let raw = entry.get(5)?.as_str().trim();
    NUMBER.is_match(raw).then(|| raw.to_string())
}

fn unquote(item: &str) -> Option<&str> {
    ['"', '\'', '`']
        .iter()
        .find_map(|&q| item.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)))
}

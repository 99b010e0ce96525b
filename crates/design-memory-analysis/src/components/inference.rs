//! Ordered heuristics over component source text.
//!
//! Every inference is a table of (predicate, result) pairs checked top-down;
//! the first match wins. None of this parses TypeScript: object literals are
//! read one brace level deep and nested braces truncate the capture.

use std::collections::BTreeMap;
use std::path::{Component, Path};

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{ComponentKind, VariantAxes};

// ---- Acceptance ----

/// A file under consideration by the acceptance rules.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Path relative to the scanned root.
    pub relative_path: &'a Path,
    pub content: &'a str,
    pub min_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Accept,
    Reject,
}

const ACCEPTANCE_RULES: &[(fn(&Candidate<'_>) -> bool, Verdict)] = &[
    (in_ui_directory, Verdict::Accept),
    (is_too_short, Verdict::Reject),
    (lacks_export, Verdict::Reject),
    (uses_variants, Verdict::Accept),
];

/// Whether a file is a component worth recording. Files matching no rule
/// are rejected.
pub fn accept_component(candidate: &Candidate<'_>) -> bool {
    ACCEPTANCE_RULES
        .iter()
        .find(|(applies, _)| applies(candidate))
        .map(|(_, verdict)| *verdict == Verdict::Accept)
        .unwrap_or(false)
}

fn in_ui_directory(candidate: &Candidate<'_>) -> bool {
    candidate
        .relative_path
        .parent()
        .is_some_and(|dir| dir.components().any(|c| c == Component::Normal("ui".as_ref())))
}

fn is_too_short(candidate: &Candidate<'_>) -> bool {
    candidate.content.chars().count() < candidate.min_chars
}

fn lacks_export(candidate: &Candidate<'_>) -> bool {
    !candidate.content.contains("export")
}

fn uses_variants(candidate: &Candidate<'_>) -> bool {
    ["cva(", "variant", "Variants"]
        .iter()
        .any(|marker| candidate.content.contains(marker))
}

// ---- Name ----

static NAME_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"export\s+(?:default\s+)?(?:function|const)\s+(\w+)",
        r"export\s+default\s+function\s+(\w+)",
        r"const\s+(\w+)\s*=\s*(?:React\.)?forwardRef",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Exported (or default-exported) function/const, then default-exported
/// function, then a `forwardRef` binding, then `file_stem`.
pub fn infer_name(content: &str, file_stem: &str) -> String {
    NAME_RULES
        .iter()
        .find_map(|rule| rule.captures(content))
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| file_stem.to_string())
}

// ---- Kind ----

const KIND_RULES: &[(&[&str], ComponentKind)] = &[
    (&["onClick", "Button", "button"], ComponentKind::Interactive),
    (&["Card", "Container", "div"], ComponentKind::Layout),
    (&["Input", "input", "Form"], ComponentKind::Form),
];

pub fn infer_kind(content: &str) -> ComponentKind {
    KIND_RULES
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| content.contains(m)))
        .map(|(_, kind)| *kind)
        .unwrap_or_default()
}

// ---- Variants ----

/// `cva(` with a string first argument, up to the opening brace of the
/// options object.
static CVA_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"cva\s*\(\s*(?:"[^"]*"|'[^']*'|`[^`]*`)\s*,\s*\{"#).unwrap());

static CVA_BASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"cva\s*\(\s*(?:"([^"]+)"|'([^']+)'|`([^`]+)`)"#).unwrap());

static VARIANTS_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"variants\s*:\s*\{").unwrap());

static NEXT_CVA: Lazy<Regex> = Lazy::new(|| Regex::new(r"cva\s*\(").unwrap());

/// One `axis: { ... }` block, the key optionally quoted.
static VARIANT_AXIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']?([\w-]+)["']?\s*:\s*\{([^}]*)\}"#).unwrap());

static VARIANT_OPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:^|[\s,{])["']?([\w-]+)["']?\s*:\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Variant axes of the first `cva` call. `None` when there is no such call,
/// it declares no `variants`, or no axis could be read.
pub fn extract_variants(content: &str) -> Option<VariantAxes> {
    let call = CVA_CALL.find(content)?;
    let options = &content[call.end()..];
    let options = match NEXT_CVA.find(options) {
        Some(next) => &options[..next.start()],
        None => options,
    };
    let key = VARIANTS_KEY.find(options)?;

    let body = &options[key.end()..];
    let mut axes = VariantAxes::new();
    let mut last = 0;
    for axis in VARIANT_AXIS.captures_iter(body) {
        let Some(block) = axis.get(0) else { continue };
        // A `}` between axes closes the `variants` object.
        if body[last..block.start()].contains('}') {
            break;
        }
        let values: BTreeMap<String, String> = VARIANT_OPTION
            .captures_iter(&axis[2])
            .map(|opt| {
                let value = opt.get(2).or_else(|| opt.get(3)).map_or("", |m| m.as_str());
                (opt[1].to_string(), value.to_string())
            })
            .collect();
        axes.insert(axis[1].to_string(), values);
        last = block.end();
    }

    (!axes.is_empty()).then_some(axes)
}

/// First string argument of `cva(`.
pub fn extract_base_classes(content: &str) -> Option<String> {
    let caps = CVA_BASE.captures(content)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().to_string())
}

// ---- Props ----

static PROPS_INTERFACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"interface\s+\w+Props[^{]*\{([^}]+)\}").unwrap());

static PROP_MEMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)(\??):\s*([^;]+);").unwrap());

/// Members of the first `interface *Props` block, stopping at its first `}`.
pub fn extract_props(content: &str) -> Option<BTreeMap<String, String>> {
    let body = PROPS_INTERFACE.captures(content)?;
    let props: BTreeMap<String, String> = PROP_MEMBER
        .captures_iter(&body[1])
        .map(|m| (m[1].to_string(), m[3].trim().to_string()))
        .collect();
    (!props.is_empty()).then_some(props)
}

// ---- Sub-components ----

static CONST_BINDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:export\s+)?const\s+(\w+)\s*=").unwrap());

/// `const` bindings whose identifier contains `name` and is not `name`.
/// Substring matching means unrelated bindings can be listed too.
pub fn extract_sub_components(content: &str, name: &str) -> Option<Vec<String>> {
    let subs: Vec<String> = CONST_BINDING
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .filter(|binding| binding != name && binding.contains(name))
        .collect();
    (!subs.is_empty()).then_some(subs)
}

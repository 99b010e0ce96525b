//! Project profiler: classifies framework and styling library from `package.json`.

use std::path::Path;

use design_memory_core::constants::{MANIFEST_FILE, UNKNOWN};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::scanner::read_optional;

/// Framework and styling library detected for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProfile {
    pub framework: String,
    pub styling_library: String,
}

impl Default for ProjectProfile {
    fn default() -> Self {
        Self {
            framework: UNKNOWN.to_string(),
            styling_library: UNKNOWN.to_string(),
        }
    }
}

/// Framework rules, first match wins. Only runtime `dependencies` count.
const FRAMEWORK_RULES: &[(&str, &str)] = &[("next", "nextjs"), ("react", "react")];

/// Styling library rules, first match wins. Dev dependencies count too.
const STYLING_RULES: &[(&str, &str)] = &[("tailwindcss", "tailwindcss")];

/// Inspect the manifest under `root`. A missing or malformed manifest yields
/// the `unknown`/`unknown` profile.
pub fn profile_project(root: &Path, max_file_size: u64) -> ProjectProfile {
    let path = root.join(MANIFEST_FILE);
    let content = match read_optional(&path, max_file_size) {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!(path = %path.display(), "no manifest");
            return ProjectProfile::default();
        }
        Err(e) => {
            warn!(error = %e, "manifest unreadable");
            return ProjectProfile::default();
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(manifest) => profile_manifest(&manifest),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "manifest is not valid JSON");
            ProjectProfile::default()
        }
    }
}

/// Classify an already-decoded manifest.
pub fn profile_manifest(manifest: &Value) -> ProjectProfile {
    let deps = manifest.get("dependencies");
    let dev_deps = manifest.get("devDependencies");

    let framework = FRAMEWORK_RULES
        .iter()
        .find(|(key, _)| has_dependency(deps, key))
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN);

    let styling_library = STYLING_RULES
        .iter()
        .find(|(key, _)| has_dependency(deps, key) || has_dependency(dev_deps, key))
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN);

    ProjectProfile {
        framework: framework.to_string(),
        styling_library: styling_library.to_string(),
    }
}

/// A dependency counts when its version entry is present and truthy.
fn has_dependency(section: Option<&Value>, key: &str) -> bool {
    match section.and_then(|s| s.get(key)) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

//! JSON rendering and output destinations.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use design_memory_analysis::DesignMemory;

/// Pretty JSON by default, single-line when `compact`.
pub fn render_json(memory: &DesignMemory, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(memory)
    } else {
        serde_json::to_string_pretty(memory)
    };
    rendered.context("Failed to serialize design memory")
}

/// Write to `path`, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory {}", parent.display())
                })?;
            }
            fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Failed to write output file {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}").context("Failed to write to stdout")
        }
    }
}

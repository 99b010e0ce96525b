//! Walks the component directories and builds one `ComponentSpec` per
//! accepted file.

use std::path::{Path, PathBuf};

use design_memory_core::config::ScanConfig;
use tracing::{debug, info, warn};

use super::inference::{
    accept_component, extract_base_classes, extract_props, extract_sub_components,
    extract_variants, infer_kind, infer_name, Candidate,
};
use super::types::ComponentSpec;
use crate::scanner::{read_source, SourceWalker};

pub struct ComponentExtractor {
    root: PathBuf,
    dirs: Vec<String>,
    walker: SourceWalker,
    min_chars: usize,
    max_file_size: u64,
}

impl ComponentExtractor {
    pub fn new(root: &Path, scan: &ScanConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            dirs: scan.effective_component_dirs(),
            walker: SourceWalker::new(scan.effective_source_extensions()),
            min_chars: scan.effective_min_component_chars(),
            max_file_size: scan.effective_max_file_size(),
        }
    }

    /// All accepted components in discovery order. Unreadable files are
    /// skipped.
    pub fn extract_all(&self) -> Vec<ComponentSpec> {
        let files = self.walker.collect_all(&self.root, &self.dirs);
        let scanned = files.len();

        let components: Vec<ComponentSpec> = files
            .iter()
            .filter_map(|path| match read_source(path, self.max_file_size) {
                Ok(content) => self.extract_file(path, content),
                Err(e) => {
                    warn!(error = %e, "failed to extract component");
                    None
                }
            })
            .collect();

        info!(scanned, accepted = components.len(), "component extraction complete");
        components
    }

    /// Build the record for one file, or `None` when acceptance rejects it.
    pub fn extract_file(&self, path: &Path, content: String) -> Option<ComponentSpec> {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let candidate = Candidate {
            relative_path: relative,
            content: &content,
            min_chars: self.min_chars,
        };
        if !accept_component(&candidate) {
            debug!(path = %relative.display(), "not a component");
            return None;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = infer_name(&content, &stem);
        let kind = infer_kind(&content);
        debug!(path = %relative.display(), name = %name, kind = %kind, "component accepted");

        Some(ComponentSpec {
            kind,
            file_path: relative.to_string_lossy().replace('\\', "/"),
            variants: extract_variants(&content),
            base_classes: extract_base_classes(&content),
            props: extract_props(&content),
            sub_components: extract_sub_components(&content, &name),
            name,
            template: content,
        })
    }
}

//! Deterministic recursive walker over conventional source directories.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Collects source files with a known extension beneath a set of directories.
///
/// Entries are visited depth-first in file-name order, so repeated walks over
/// an unchanged tree return the same sequence.
#[derive(Debug, Clone)]
pub struct SourceWalker {
    extensions: Vec<String>,
}

impl SourceWalker {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Walk `dirs` (relative to `root`) in the order given and concatenate
    /// their matches. Missing directories contribute nothing.
    pub fn collect_all(&self, root: &Path, dirs: &[String]) -> Vec<PathBuf> {
        dirs.iter()
            .flat_map(|dir| self.collect(&root.join(dir)))
            .collect()
    }

    /// Walk a single directory. Unreadable entries are skipped.
    pub fn collect(&self, dir: &Path) -> Vec<PathBuf> {
        if !dir.is_dir() {
            return Vec::new();
        }

        WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.has_source_extension(path))
            .collect()
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known == ext))
    }
}

//! Pattern detection over the concatenated component and page sources.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use design_memory_core::config::ScanConfig;
use once_cell::sync::Lazy;
use tracing::{debug, info};

use super::markers::{Marker, MarkerHits, MarkerSet};
use super::templates;
use super::types::{DetectedPatterns, LayoutPattern};
use crate::scanner::{read_source, SourceWalker};

static MARKERS: Lazy<MarkerSet> = Lazy::new(|| MarkerSet::new().unwrap());

/// How a signature combines its markers.
#[derive(Debug, Clone, Copy)]
enum Signature {
    AnyOf(&'static [Marker]),
    AllOf(&'static [Marker]),
}

impl Signature {
    fn matches(&self, hits: &MarkerHits) -> bool {
        match self {
            Signature::AnyOf(markers) => hits.any(markers),
            Signature::AllOf(markers) => hits.all(markers),
        }
    }
}

const GLASSMORPHISM: Signature =
    Signature::AnyOf(&[Marker::BackdropBlur, Marker::TranslucentBackground]);
const GRADIENTS: Signature = Signature::AnyOf(&[Marker::ClipText, Marker::GradientToRight]);
const MOTION: Signature = Signature::AnyOf(&[Marker::FramerMotion, Marker::MotionElement]);

const LAYOUT_RULES: &[(&str, Signature, fn() -> LayoutPattern)] = &[
    (
        "hero",
        Signature::AllOf(&[Marker::FullHeight, Marker::CenteredFlex]),
        templates::hero,
    ),
    (
        "navbar",
        Signature::AllOf(&[Marker::FixedTop, Marker::BackdropBlur]),
        templates::navbar,
    ),
    (
        "featureGrid",
        Signature::AnyOf(&[Marker::ResponsiveGrid, Marker::GridColumns]),
        templates::feature_grid,
    ),
];

/// Classify idioms in `source`. Pure: the result depends only on which
/// markers occur, not where.
pub fn detect_patterns(source: &str) -> DetectedPatterns {
    let hits = MARKERS.match_content(source);

    let layouts: BTreeMap<String, LayoutPattern> = LAYOUT_RULES
        .iter()
        .filter(|(_, signature, _)| signature.matches(&hits))
        .map(|(name, _, template)| (name.to_string(), template()))
        .collect();

    DetectedPatterns {
        glassmorphism: GLASSMORPHISM.matches(&hits).then(templates::glassmorphism),
        gradients: GRADIENTS.matches(&hits).then(templates::gradients),
        animations: MOTION.matches(&hits).then(|| {
            templates::animations(
                hits.contains(Marker::WhileInView),
                hits.contains(Marker::AnimateProp),
            )
        }),
        layouts: (!layouts.is_empty()).then_some(layouts),
    }
}

/// Reads the pattern directories into one buffer and runs `detect_patterns`.
pub struct PatternDetector {
    root: PathBuf,
    dirs: Vec<String>,
    walker: SourceWalker,
    max_file_size: u64,
}

impl PatternDetector {
    pub fn new(root: &Path, scan: &ScanConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            dirs: scan.effective_pattern_dirs(),
            walker: SourceWalker::new(scan.effective_source_extensions()),
            max_file_size: scan.effective_max_file_size(),
        }
    }

    pub fn detect(&self) -> DetectedPatterns {
        let source = self.collect_source();
        let patterns = detect_patterns(&source);
        info!(
            bytes = source.len(),
            detected = ?patterns.names(),
            "pattern detection complete"
        );
        patterns
    }

    /// Every source file under the pattern directories, newline-joined in
    /// walk order. Unreadable files are left out.
    pub fn collect_source(&self) -> String {
        let mut buffer = String::new();
        for path in self.walker.collect_all(&self.root, &self.dirs) {
            match read_source(&path, self.max_file_size) {
                Ok(content) => {
                    buffer.push_str(&content);
                    buffer.push('\n');
                }
                Err(e) => debug!(error = %e, "skipping pattern source"),
            }
        }
        buffer
    }
}

//! Pattern detector: recurring UI idioms recognised from raw source text.

pub mod detector;
pub mod markers;
pub mod templates;
pub mod types;

pub use detector::{detect_patterns, PatternDetector};
pub use markers::{Marker, MarkerHits, MarkerSet};
pub use types::{AnimationPattern, DetectedPatterns, LayoutPattern, StylePattern};

//! Literal marker matching in a single pass over the source buffer.

use regex::RegexSet;

/// Source-text markers the detector looks for. Each is a plain substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    BackdropBlur,
    TranslucentBackground,
    ClipText,
    GradientToRight,
    FramerMotion,
    MotionElement,
    WhileInView,
    AnimateProp,
    FullHeight,
    CenteredFlex,
    FixedTop,
    ResponsiveGrid,
    GridColumns,
}

impl Marker {
    pub const ALL: [Marker; 13] = [
        Marker::BackdropBlur,
        Marker::TranslucentBackground,
        Marker::ClipText,
        Marker::GradientToRight,
        Marker::FramerMotion,
        Marker::MotionElement,
        Marker::WhileInView,
        Marker::AnimateProp,
        Marker::FullHeight,
        Marker::CenteredFlex,
        Marker::FixedTop,
        Marker::ResponsiveGrid,
        Marker::GridColumns,
    ];

    pub fn literal(&self) -> &'static str {
        match self {
            Self::BackdropBlur => "backdrop-blur",
            Self::TranslucentBackground => "bg-background/",
            Self::ClipText => "bg-clip-text",
            Self::GradientToRight => "bg-gradient-to-r",
            Self::FramerMotion => "framer-motion",
            Self::MotionElement => "motion.",
            Self::WhileInView => "whileInView",
            Self::AnimateProp => "animate={{",
            Self::FullHeight => "min-h-screen",
            Self::CenteredFlex => "flex items-center justify-center",
            Self::FixedTop => "fixed top",
            Self::ResponsiveGrid => "grid md:grid-cols",
            Self::GridColumns => "grid-cols-",
        }
    }
}

/// Which markers occur in a buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerHits([bool; Marker::ALL.len()]);

impl MarkerHits {
    pub fn contains(&self, marker: Marker) -> bool {
        self.0[marker as usize]
    }

    pub fn any(&self, markers: &[Marker]) -> bool {
        markers.iter().any(|m| self.contains(*m))
    }

    pub fn all(&self, markers: &[Marker]) -> bool {
        markers.iter().all(|m| self.contains(*m))
    }
}

/// Every marker compiled into one `RegexSet` over escaped literals.
pub struct MarkerSet {
    regex_set: RegexSet,
}

impl MarkerSet {
    pub fn new() -> Result<Self, regex::Error> {
        let patterns: Vec<String> = Marker::ALL.iter().map(|m| regex::escape(m.literal())).collect();
        Ok(Self {
            regex_set: RegexSet::new(&patterns)?,
        })
    }

    pub fn match_content(&self, content: &str) -> MarkerHits {
        let mut hits = MarkerHits::default();
        for idx in self.regex_set.matches(content).into_iter() {
            hits.0[Marker::ALL[idx] as usize] = true;
        }
        hits
    }

    pub fn pattern_count(&self) -> usize {
        self.regex_set.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_indices_line_up() {
        for (idx, marker) in Marker::ALL.iter().enumerate() {
            assert_eq!(*marker as usize, idx);
        }
        assert_eq!(MarkerSet::new().unwrap().pattern_count(), Marker::ALL.len());
    }

    #[test]
    fn test_literals_are_not_regexes() {
        let set = MarkerSet::new().unwrap();
        assert!(!set.match_content("motionXdiv").contains(Marker::MotionElement));
        assert!(set.match_content("<motion.div>").contains(Marker::MotionElement));
        assert!(set.match_content("animate={{ x: 1 }}").contains(Marker::AnimateProp));
    }

    #[test]
    fn test_overlapping_markers_all_reported() {
        let hits = MarkerSet::new()
            .unwrap()
            .match_content(r#"<div className="grid md:grid-cols-3" />"#);
        assert!(hits.all(&[Marker::ResponsiveGrid, Marker::GridColumns]));
        assert!(!hits.any(&[Marker::BackdropBlur, Marker::FixedTop]));
    }
}

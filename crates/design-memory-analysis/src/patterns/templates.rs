//! Fixed pattern records. The scan only decides which ones are emitted.

use std::collections::BTreeMap;

use super::types::{AnimationPattern, LayoutPattern, StylePattern};

const GLASS_USAGE: &str = r#"<div className="bg-background/60 backdrop-blur-xl border border-primary/10 rounded-lg p-6">
  Content
</div>"#;

const GRADIENT_USAGE: &str = r#"<h1 className="bg-clip-text text-transparent bg-gradient-to-r from-primary via-primary/70 to-primary">
  Gradient Text
</h1>"#;

const IN_VIEW_EXAMPLE: &str = r#"<motion.div
  initial={{ opacity: 0, y: 20 }}
  whileInView={{ opacity: 1, y: 0 }}
  viewport={{ once: true }}
  transition={{ delay: 0.2 }}
>
  Content
</motion.div>"#;

const LOOPING_EXAMPLE: &str = r#"<motion.div
  animate={{ x: [0, 100, 0], scale: [1, 1.2, 1] }}
  transition={{ duration: 2, repeat: Infinity }}
>
  Animated Element
</motion.div>"#;

const MOTION_TEMPLATE: &str = r#"import { motion } from "framer-motion"

<motion.div
  initial={{ opacity: 0, y: 20 }}
  animate={{ opacity: 1, y: 0 }}
  transition={{ duration: 0.8 }}
>
  Content
</motion.div>"#;

const HERO_TEMPLATE: &str = r#"<div className="relative min-h-screen flex items-center justify-center overflow-hidden">
  {/* Animated background */}
  <div className="absolute inset-0 overflow-hidden">
    {/* Background elements */}
  </div>
  
  {/* Content */}
  <div className="container relative z-10 px-4">
    {/* Hero content */}
  </div>
  
  {/* Gradient fade */}
  <div className="absolute inset-x-0 bottom-0 h-32 bg-gradient-to-t from-background to-transparent" />
</div>"#;

const NAVBAR_TEMPLATE: &str = r#"<nav className="fixed top-10 inset-x-0 md:max-w-2xl max-w-sm mx-auto z-50">
  <div className="flex items-center justify-between bg-background/60 backdrop-blur-xl rounded-full border border-primary/10 px-4 py-2">
    {/* Nav content */}
  </div>
</nav>"#;

const FEATURE_GRID_TEMPLATE: &str = r#"<div className="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
  {items.map((item, index) => (
    <motion.div
      key={index}
      whileHover={{ y: -5 }}
    >
      <Card className="hover:border-primary/20">
        {/* Item content */}
      </Card>
    </motion.div>
  ))}
</div>"#;

fn variations(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, classes)| (name.to_string(), classes.to_string()))
        .collect()
}

pub fn glassmorphism() -> StylePattern {
    StylePattern {
        description: "Backdrop blur with semi-transparent backgrounds".to_string(),
        base_classes: "bg-background/60 backdrop-blur-xl border border-primary/10".to_string(),
        variations: variations(&[
            ("light", "bg-background/90 backdrop-blur-xl"),
            ("medium", "bg-background/60 backdrop-blur-xl"),
            ("heavy", "bg-background/40 backdrop-blur-2xl"),
        ]),
        usage: GLASS_USAGE.to_string(),
    }
}

pub fn gradients() -> StylePattern {
    StylePattern {
        description: "Gradient text effects using bg-clip-text".to_string(),
        base_classes: "bg-clip-text text-transparent bg-gradient-to-r".to_string(),
        variations: variations(&[
            ("primary", "from-primary via-primary/70 to-primary"),
            ("subtle", "from-primary/80 to-primary/40"),
            ("rainbow", "from-primary via-accent to-secondary"),
        ]),
        usage: GRADIENT_USAGE.to_string(),
    }
}

/// Motion record with the examples selected by the scan, in-view first.
pub fn animations(in_view: bool, looping: bool) -> AnimationPattern {
    let examples = [(in_view, IN_VIEW_EXAMPLE), (looping, LOOPING_EXAMPLE)]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, example)| example.to_string())
        .collect();

    AnimationPattern {
        description: "Framer Motion animations for entrance and interactions".to_string(),
        implementation: "framer-motion".to_string(),
        template: MOTION_TEMPLATE.to_string(),
        examples,
    }
}

pub fn hero() -> LayoutPattern {
    LayoutPattern {
        structure: "full-screen centered with animated background".to_string(),
        template: HERO_TEMPLATE.to_string(),
        description: Some(
            "Hero section with full viewport height, centered content, and animated background"
                .to_string(),
        ),
    }
}

pub fn navbar() -> LayoutPattern {
    LayoutPattern {
        structure: "fixed top with glassmorphism".to_string(),
        template: NAVBAR_TEMPLATE.to_string(),
        description: Some("Fixed navigation bar with glassmorphic effect".to_string()),
    }
}

pub fn feature_grid() -> LayoutPattern {
    LayoutPattern {
        structure: "responsive grid with hover effects".to_string(),
        template: FEATURE_GRID_TEMPLATE.to_string(),
        description: Some("Responsive grid layout for features or cards".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_trimmed() {
        for template in [GLASS_USAGE, HERO_TEMPLATE, MOTION_TEMPLATE, FEATURE_GRID_TEMPLATE] {
            assert_eq!(template, template.trim());
        }
    }

    #[test]
    fn test_animation_examples_follow_flags() {
        assert!(animations(false, false).examples.is_empty());
        assert_eq!(animations(true, true).examples, vec![IN_VIEW_EXAMPLE, LOOPING_EXAMPLE]);
        assert_eq!(animations(false, true).examples, vec![LOOPING_EXAMPLE]);
    }

    #[test]
    fn test_motion_template_imports_framer() {
        assert!(MOTION_TEMPLATE.starts_with("import { motion } from \"framer-motion\""));
    }
}

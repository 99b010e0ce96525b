//! End-to-end extraction over fixture trees.

use std::fs;
use std::path::Path;

use design_memory_analysis::patterns::templates;
use design_memory_analysis::tokens::ColorEncoding;
use design_memory_analysis::{
    extract_design_system, extract_design_system_with_config, ComponentKind,
};
use design_memory_core::errors::ExtractError;
use design_memory_core::DesignMemoryConfig;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn padded(content: &str) -> String {
    format!("{content}\n// {}\n", "-".repeat(200))
}

const BUTTON: &str = r#"import * as React from "react"
import { cva } from "class-variance-authority"

const buttonVariants = cva("inline-flex items-center rounded-md", {
  variants: {
    variant: {
      default: "bg-primary text-primary-foreground",
      ghost: "hover:bg-accent",
    },
  },
})

const Button = React.forwardRef(({ className, ...props }, ref) => (
  <button className={buttonVariants({ className })} ref={ref} {...props} />
))

export { Button, buttonVariants }
"#;

#[test]
fn test_missing_root_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    match extract_design_system(&missing) {
        Err(ExtractError::RootNotFound { path }) => assert!(path.ends_with("does-not-exist")),
        other => panic!("expected RootNotFound, got {other:?}"),
    }
}

#[test]
fn test_empty_root_degrades_to_defaults() {
    let dir = TempDir::new().unwrap();
    let memory = extract_design_system(dir.path()).unwrap();

    assert_eq!(memory.metadata.framework, "unknown");
    assert_eq!(memory.metadata.styling_library, "unknown");
    assert!(memory.design_tokens.colors.light.is_empty());
    assert!(memory.design_tokens.colors.dark.is_empty());
    assert!(memory.design_tokens.colors.custom.is_empty());
    assert_eq!(memory.design_tokens.colors.system, ColorEncoding::Hsl);
    assert!(memory.design_tokens.animations.is_none());
    assert!(memory.design_tokens.shadows.is_none());
    assert!(memory.components.is_empty());
    assert!(memory.patterns.is_empty());
    assert!(memory.utilities.cn_function.is_none());
    assert_eq!(memory.utilities.common_hooks, vec!["useState", "useEffect", "useTheme"]);
    assert_eq!(memory.design_tokens.spacing.base, "0.25rem");
    assert_eq!(memory.design_tokens.spacing.scale.len(), 10);
    assert_eq!(memory.instructions.setup.len(), 5);
}

#[test]
fn test_metadata_names_the_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("acme-site");
    fs::create_dir_all(&root).unwrap();
    write(
        &root,
        "package.json",
        r#"{ "dependencies": { "next": "14.2.0", "react": "18" }, "devDependencies": { "tailwindcss": "3.4" } }"#,
    );

    let memory = extract_design_system(&root).unwrap();
    assert_eq!(memory.metadata.project_name, "acme-site");
    assert_eq!(memory.metadata.framework, "nextjs");
    assert_eq!(memory.metadata.styling_library, "tailwindcss");
    assert!(Path::new(&memory.metadata.source_path).is_absolute());
}

#[test]
fn test_theme_variables_and_hsl() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "app/globals.css",
        ":root{--bg: 0 0% 100%}\n.dark{--bg: 0 0% 0%}\n",
    );

    let colors = extract_design_system(dir.path()).unwrap().design_tokens.colors;
    assert_eq!(colors.light["bg"], "0 0% 100%");
    assert_eq!(colors.dark["bg"], "0 0% 0%");
    assert_eq!(colors.system, ColorEncoding::Hsl);
}

#[test]
fn test_hex_theme() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "src/index.css",
        ":root {\n  --background: #ffffff;\n  --accent: 210 40% 96%;\n}\n",
    );

    let colors = extract_design_system(dir.path()).unwrap().design_tokens.colors;
    assert_eq!(colors.system, ColorEncoding::Hex);
    assert_eq!(colors.light.len(), 2);
}

#[test]
fn test_keyframes_and_tailwind_config() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "app/globals.css",
        "@keyframes float { 0% { transform: translateY(0) } }\n",
    );
    write(
        dir.path(),
        "tailwind.config.ts",
        r#"export default {
  theme: {
    extend: {
      fontFamily: { heading: ["Inter", "sans-serif"] },
      borderRadius: { lg: "1rem" },
      animation: { float: "float 6s ease-in-out infinite" },
    },
  },
}"#,
    );

    let tokens = extract_design_system(dir.path()).unwrap().design_tokens;
    assert_eq!(tokens.typography.font_families["heading"], vec!["Inter", "sans-serif"]);
    assert_eq!(tokens.typography.font_families["sans"], vec!["system-ui", "sans-serif"]);
    assert_eq!(tokens.border_radius.base, "1rem");
    assert_eq!(tokens.border_radius.md, "calc(var(--radius) - 2px)");

    let animations = tokens.animations.unwrap();
    assert_eq!(animations.keyframes["float"].name, "float");
    assert_eq!(animations.named["float"], "float 6s ease-in-out infinite");
}

#[test]
fn test_component_acceptance() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "components/ui/button.tsx", BUTTON);
    write(root, "components/ui/dot.tsx", "<span />");
    write(root, "components/footer.tsx", &padded("export function Footer() { return <footer /> }"));
    write(root, "components/short.tsx", "export const Badge = variant");
    write(
        root,
        "src/components/tile.tsx",
        &padded("export const Tile = ({ variant }) => <div data-variant={variant} />"),
    );

    let memory = extract_design_system(root).unwrap();
    let names: Vec<&str> = memory.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Button", "dot", "Tile"]);

    let button = memory.component("Button").unwrap();
    assert_eq!(button.kind, ComponentKind::Interactive);
    assert_eq!(button.file_path, "components/ui/button.tsx");
    assert_eq!(button.base_classes.as_deref(), Some("inline-flex items-center rounded-md"));
    let variants = button.variants.as_ref().unwrap();
    assert_eq!(variants["variant"]["ghost"], "hover:bg-accent");
    assert_eq!(button.sub_components, None);
    assert_eq!(button.template, BUTTON);

    assert_eq!(memory.component("Tile").unwrap().kind, ComponentKind::Layout);
}

#[test]
fn test_component_extraction_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "components/ui/button.tsx", BUTTON);
    write(dir.path(), "app/components/ui/card.tsx", "export const Card = 1; export const CardTitle = 2;");

    let first = extract_design_system(dir.path()).unwrap().components;
    let second = extract_design_system(dir.path()).unwrap().components;
    assert_eq!(first, second);
    assert_eq!(first[1].sub_components.as_deref(), Some(&["CardTitle".to_string()][..]));
}

#[test]
fn test_components_are_capped() {
    let dir = TempDir::new().unwrap();
    for i in 0..25 {
        write(dir.path(), &format!("components/ui/item{i:02}.tsx"), "<div />");
    }

    let memory = extract_design_system(dir.path()).unwrap();
    assert_eq!(memory.components.len(), 20);
    assert_eq!(memory.components[0].name, "item00");
    assert_eq!(memory.components[19].name, "item19");

    let mut config = DesignMemoryConfig::default();
    config.scan.max_components = Some(3);
    let capped = extract_design_system_with_config(dir.path(), &config).unwrap();
    assert_eq!(capped.components.len(), 3);
}

#[test]
fn test_glassmorphism_from_any_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app/dashboard/page.tsx", "<aside className=\"backdrop-blur-md\" />");

    let patterns = extract_design_system(dir.path()).unwrap().patterns;
    assert_eq!(patterns.glassmorphism, Some(templates::glassmorphism()));
    assert!(patterns.gradients.is_none());
    assert!(patterns.layouts.is_none());
}

#[test]
fn test_cn_helper_recovered() {
    let dir = TempDir::new().unwrap();
    let helper = "import { clsx } from \"clsx\"\nexport function cn(...inputs) { return clsx(inputs) }\n";
    write(dir.path(), "lib/utils.ts", helper);

    let memory = extract_design_system(dir.path()).unwrap();
    assert_eq!(memory.utilities.cn_function.as_deref(), Some(helper));
}

#[test]
fn test_document_serializes_in_camel_case() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "components/ui/button.tsx", BUTTON);

    let memory = extract_design_system(dir.path()).unwrap();
    let json = serde_json::to_value(&memory).unwrap();

    assert!(json["metadata"]["extractedAt"].is_string());
    assert!(json["designTokens"]["borderRadius"]["lg"].is_string());
    assert_eq!(json["designTokens"]["colors"]["system"], "hsl");
    assert_eq!(json["components"][0]["type"], "interactive");
    assert!(json["components"][0]["baseClasses"].is_string());
    assert!(json["designTokens"].get("animations").is_none());
    assert_eq!(json["patterns"], serde_json::json!({}));
    assert!(json["utilities"].get("cnFunction").is_none());
}

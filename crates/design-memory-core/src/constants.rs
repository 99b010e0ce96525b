//! Shared constants for the design-memory extractor.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of components kept in a design memory document.
pub const DEFAULT_MAX_COMPONENTS: usize = 20;

/// Files outside a `ui` directory shorter than this are not substantive.
pub const DEFAULT_MIN_COMPONENT_CHARS: usize = 200;

/// Maximum file size in bytes read by the scanner (default: 1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Value reported when the framework or styling library cannot be determined.
pub const UNKNOWN: &str = "unknown";

/// Package manifest read by the project profiler.
pub const MANIFEST_FILE: &str = "package.json";

// ---- Conventional locations, relative to the scanned root ----

/// Directories walked by the component extractor, in walk order.
pub const DEFAULT_COMPONENT_DIRS: &[&str] = &["components", "app/components", "src/components"];

/// Directories whose sources feed the pattern detector, in walk order.
pub const DEFAULT_PATTERN_DIRS: &[&str] = &["components", "app"];

/// Extensions of component source files.
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx"];

/// Global stylesheet candidates; the first existing file wins.
pub const DEFAULT_STYLESHEETS: &[&str] = &[
    "app/globals.css",
    "src/app/globals.css",
    "styles/globals.css",
    "src/styles/globals.css",
    "src/index.css",
];

/// Tailwind config candidates; the first readable file wins.
pub const DEFAULT_TAILWIND_CONFIGS: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.ts",
    "tailwind.config.mjs",
];

/// Class-merging helper candidates.
pub const DEFAULT_UTILS_FILES: &[&str] = &["lib/utils.ts", "src/lib/utils.ts"];

// ---- Fixed design data ----

/// Radius used for `base` when the config does not override `lg`.
pub const DEFAULT_RADIUS: &str = "0.75rem";

/// Base unit of the spacing scale.
pub const SPACING_BASE: &str = "0.25rem";

/// Spacing scale multipliers.
pub const SPACING_SCALE: [f64; 10] = [0.0, 0.25, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 6.0, 8.0];

/// Hooks listed in every design memory document.
pub const COMMON_HOOKS: [&str; 3] = ["useState", "useEffect", "useTheme"];

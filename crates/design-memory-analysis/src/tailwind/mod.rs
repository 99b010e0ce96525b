//! Config extractor: heuristic reading of the Tailwind config file.

pub mod derive;
pub mod extractor;
pub mod types;

pub use derive::{extract_border_radius, extract_shadows, extract_typography};
pub use extractor::{find_tailwind_config, parse_tailwind_config};
pub use types::TailwindConfig;

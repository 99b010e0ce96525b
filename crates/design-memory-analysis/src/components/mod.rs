//! Component extractor: per-file identity, role, variants and props.

pub mod extractor;
pub mod inference;
pub mod types;

pub use extractor::ComponentExtractor;
pub use inference::{
    accept_component, extract_base_classes, extract_props, extract_sub_components,
    extract_variants, infer_kind, infer_name,
};
pub use types::{ComponentKind, ComponentSpec, VariantAxes};

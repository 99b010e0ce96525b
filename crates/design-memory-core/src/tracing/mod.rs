//! Observability for design-memory.
//! `tracing` crate with `EnvFilter`, per-stage log levels.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_default};

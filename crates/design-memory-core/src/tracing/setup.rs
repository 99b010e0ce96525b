//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "DESIGN_MEMORY_LOG";

/// Filter used when `DESIGN_MEMORY_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "design_memory=info";

/// Initialize the design-memory tracing/logging system.
///
/// Reads `DESIGN_MEMORY_LOG` for per-stage log levels.
/// Format: `DESIGN_MEMORY_LOG=design_memory_analysis::components=debug,design_memory=info`
///
/// Falls back to `design_memory=info` if the variable is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_FILTER);
}

/// Like [`init_tracing`], with a caller-chosen fallback filter.
///
/// Logs go to stderr so stdout stays free for the extracted document.
pub fn init_tracing_with_default(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}

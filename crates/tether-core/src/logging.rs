//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Tether tracing/logging system.
///
/// Reads the `TETHER_LOG` environment variable for per-subsystem log
/// levels, e.g. `TETHER_LOG=tether_tokens=debug,tether_analysis=info`.
/// Falls back to `tether=info` if `TETHER_LOG` is not set or is invalid.
///
/// Library code never installs a subscriber on its own; call this from
/// the application entry point. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TETHER_LOG")
            .unwrap_or_else(|_| EnvFilter::new("tether=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}

/// Initialize with an explicit filter directive, bypassing `TETHER_LOG`.
/// Useful in tests and examples.
pub fn init_with_filter(directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::new(directive);

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}

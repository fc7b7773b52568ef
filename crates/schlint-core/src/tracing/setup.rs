//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the schlint logging system.
///
/// Reads the `SCHLINT_LOG` environment variable for per-module log levels,
/// e.g. `SCHLINT_LOG=schlint_analysis=debug`. Falls back to `schlint=warn`.
/// Logs go to stderr; stdout carries the report.
///
/// Idempotent: calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SCHLINT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("schlint=warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

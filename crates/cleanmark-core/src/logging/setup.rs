//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants;

static INIT: Once = Once::new();

/// Initialize the cleanmark tracing/logging system.
///
/// Reads the `CLEANMARK_LOG` environment variable for per-target levels
/// (e.g. `CLEANMARK_LOG=cleanmark_outcome=debug`). Falls back to
/// `config.level` when the variable is unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(config.effective_level()));

        if config.effective_json() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .init();
        }
    });
}

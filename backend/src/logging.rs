//! Diagnostic logging for hosts and extension modules
//!
//! Log events go to stderr so a host's stdout stays exactly what the
//! embedded program printed. The filter comes from `RUST_LOG` and falls back
//! to [`DEFAULT_LOG_FILTER`].

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_FILTER: &str = "warn";

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global tracing subscriber
///
/// Safe to call more than once; only the first call does anything. If some
/// other component already installed a global subscriber, that one is kept.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let installed = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_ansi(false)
            .try_init();

        if installed.is_err() {
            tracing::debug!("Global tracing subscriber already initialized - keeping it");
        }
    });
}

//! Opt-in `tracing` subscriber setup for binaries and tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
const DEFAULT_DIRECTIVE: &str = "bengali_calendar=info";

/// Installs a global fmt subscriber honouring `RUST_LOG`.
///
/// Safe to call repeatedly; a subscriber already installed by the host wins.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        if fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::info!("bengali_calendar tracing initialized.");
        }
    });
}

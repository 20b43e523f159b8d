//! Logging setup

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless: later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

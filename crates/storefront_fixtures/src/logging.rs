//! Tracing setup for tests

use once_cell::sync::Lazy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Another subscriber may already be installed by the host test binary.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_test_writer())
        .try_init();
});

/// Installs a fmt subscriber filtered by `RUST_LOG` (default `warn`)
///
/// Safe to call from every test; only the first call has an effect.
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}

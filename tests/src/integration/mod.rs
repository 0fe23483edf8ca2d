//! # Integration Tests
//!
//! Whole-service tests over the public `RegistryApi` surface. Every test
//! builds a real `RegistryService` wired to the in-memory ledger and event
//! log, so fee settlement and the event side channel are asserted alongside
//! registry state.

pub mod lifecycle;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a log subscriber for test runs.
///
/// Every test may call this; the first call wins and the rest are no-ops.
/// Set `RUST_LOG` to see registry spans while debugging a failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

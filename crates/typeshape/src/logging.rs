//! Tracing setup for test binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a subscriber that writes through the test harness's capture.
///
/// `RUST_LOG` overrides the default `info` level. Later calls are no-ops, so
/// every test may call this.
pub fn init_test_tracing() {
    init_test_tracing_with("info");
}

/// Like [`init_test_tracing`], with an explicit fallback filter.
pub fn init_test_tracing_with(filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_test_writer(),
        )
        .try_init();
}

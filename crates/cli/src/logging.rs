//! Diagnostic tracing to stderr.
//!
//! Reads `RUST_LOG`; defaults to `warn`, which shows contract failures and
//! commit conflicts. `RUST_LOG=showroom=debug` adds every dispatch and commit.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

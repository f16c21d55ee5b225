//! Diagnostics for the demo, written to stderr so they never mix with prompts.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Reads `RUST_LOG`, defaulting to `warn`.
///
/// ```bash
/// RUST_LOG=askloop=debug cargo run -p askloop-cli
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

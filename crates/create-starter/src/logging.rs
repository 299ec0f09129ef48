//! Developer diagnostics via `RUST_LOG`, written to stderr.
//!
//! User-facing output goes through cliclack; this is only for debugging,
//! e.g. `RUST_LOG=starter_core=debug create-starter my-app`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Defaults to `warn` if `RUST_LOG` is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

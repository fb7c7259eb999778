use anyhow::{Context, Result};
use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Filter directives used when `RUST_LOG` is not set. Dependencies stay at `warn`.
fn default_directives(verbose: bool) -> &'static str {
    if verbose { "warn,cambio=debug" } else { "warn" }
}

/// Installs the global subscriber. Logs go to stderr; stdout is for command output.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(verbose)))
        .context("Invalid log filter")?;

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time();

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .context("Failed to install logging subscriber")
}

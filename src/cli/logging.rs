//! Diagnostic logging for the terminal session.
//!
//! Logs go to stderr so they never interleave with the table on stdout.
//! `RUST_LOG` takes precedence over the configured `log_filter`.

use scholar_desk::ArticleError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`ArticleError::Configuration`] when the filter directive does not
/// parse or a subscriber is already installed.
pub fn init(log_filter: &str) -> Result<(), ArticleError> {
    let filter = resolve_filter(log_filter)?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|error| ArticleError::Configuration {
            message: format!("failed to install logger: {error}"),
        })
}

fn resolve_filter(log_filter: &str) -> Result<EnvFilter, ArticleError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_filter))
        .map_err(|error| ArticleError::Configuration {
            message: format!("invalid log filter '{log_filter}': {error}"),
        })
}

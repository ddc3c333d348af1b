//! Scholar Desk terminal entrypoint.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use scholar_desk::{ArticleError, ScholarDeskConfig};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ArticleError> {
    let config = load_config()?;
    cli::logging::init(&config.log_filter)?;
    cli::session::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ArticleError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ScholarDeskConfig, ArticleError> {
    ScholarDeskConfig::load().map_err(|error| ArticleError::Configuration {
        message: error.to_string(),
    })
}

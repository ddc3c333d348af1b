//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.scholar-desk.toml` in the current directory,
//!    home directory, or `scholar-desk.toml` in the XDG config directory
//! 3. **Environment variables** – `SCHOLAR_DESK_BASE_URL`,
//!    `SCHOLAR_DESK_ARTICLES_PATH`, and so on
//! 4. **Command-line arguments** – `--base-url`/`-b`, `--html-output`/`-o`, ...
//!
//! # Configuration File
//!
//! ```toml
//! base_url = "http://localhost:8080"
//! articles_path = "/articles"
//! request_timeout_seconds = 20
//! html_output = "articles.html"
//! log_filter = "scholar_desk=debug"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::articles::{ArticleEndpoint, ArticleError};

/// Default backend origin.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default collection path.
pub const DEFAULT_ARTICLES_PATH: &str = "/articles";

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 20;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use scholar_desk::ScholarDeskConfig;
///
/// let config = ScholarDeskConfig::load().expect("failed to load configuration");
/// let endpoint = config.endpoint().expect("valid endpoint");
/// println!("{}", endpoint.collection_url());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SCHOLAR_DESK",
    discovery(
        dotfile_name = ".scholar-desk.toml",
        config_file_name = "scholar-desk.toml",
        app_name = "scholar-desk"
    )
)]
pub struct ScholarDeskConfig {
    /// Origin of the article service, for example `http://localhost:8080`.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `SCHOLAR_DESK_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: String,

    /// Path of the article collection below the origin.
    #[ortho_config()]
    pub articles_path: String,

    /// Timeout applied to every request, in seconds. Must be positive.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// File that receives the table-body markup after every render.
    ///
    /// Can be provided via:
    /// - CLI: `--html-output <PATH>` or `-o <PATH>`
    /// - Environment: `SCHOLAR_DESK_HTML_OUTPUT`
    /// - Config file: `html_output = "..."`
    #[ortho_config(cli_short = 'o')]
    pub html_output: Option<String>,

    /// Confirms deletions without asking.
    ///
    /// Can be provided via:
    /// - CLI: `--assume-yes` / `-y`
    /// - Config file: `assume_yes = true`
    ///
    /// Note: boolean values are not loaded from the environment.
    #[ortho_config(cli_short = 'y')]
    pub assume_yes: bool,

    /// Writes telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[ortho_config()]
    pub log_filter: String,
}

impl Default for ScholarDeskConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            articles_path: DEFAULT_ARTICLES_PATH.to_owned(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            html_output: None,
            assume_yes: false,
            telemetry: false,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl ScholarDeskConfig {
    /// Resolves the article collection endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::InvalidUrl`] when the base URL does not parse
    /// or does not use `http`/`https`.
    pub fn endpoint(&self) -> Result<ArticleEndpoint, ArticleError> {
        ArticleEndpoint::parse(&self.base_url, &self.articles_path)
    }

    /// Returns the request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::Configuration`] when the timeout is zero.
    pub fn request_timeout(&self) -> Result<Duration, ArticleError> {
        if self.request_timeout_seconds == 0 {
            return Err(ArticleError::Configuration {
                message: "request timeout must be at least one second".to_owned(),
            });
        }
        Ok(Duration::from_secs(self.request_timeout_seconds))
    }

    /// Returns the HTML mirror path when one is configured.
    #[must_use]
    pub fn html_output(&self) -> Option<&str> {
        self.html_output
            .as_deref()
            .filter(|path| !path.trim().is_empty())
    }
}

#[cfg(test)]
mod tests;

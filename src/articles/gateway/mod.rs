//! Gateways for reaching the article service over HTTP.
//!
//! The trait-based design lets the list view run against mocks in tests while
//! [`HttpArticleGateway`] performs real requests with `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use http::header::ACCEPT;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use super::error::ArticleError;
use super::locator::ArticleEndpoint;
use super::models::{Article, ArticleId};

/// Gateway that can list, look up, and delete articles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleGateway: Send + Sync {
    /// Fetch the article collection.
    ///
    /// A response that is not a JSON array yields an empty listing.
    async fn list_articles(&self) -> Result<Vec<Article>, ArticleError>;

    /// Fetch a single article.
    async fn article(&self, id: &ArticleId) -> Result<Article, ArticleError>;

    /// Delete a single article.
    async fn delete_article(&self, id: &ArticleId) -> Result<(), ArticleError>;
}

/// `reqwest`-backed gateway.
#[derive(Debug, Clone)]
pub struct HttpArticleGateway {
    client: Client,
    endpoint: ArticleEndpoint,
}

impl HttpArticleGateway {
    /// Creates a gateway from an existing client.
    #[must_use]
    pub const fn new(client: Client, endpoint: ArticleEndpoint) -> Self {
        Self { client, endpoint }
    }

    /// Builds a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn with_timeout(
        endpoint: ArticleEndpoint,
        timeout: Duration,
    ) -> Result<Self, ArticleError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| ArticleError::Configuration {
                message: format!("failed to configure article HTTP client: {error}"),
            })?;
        Ok(Self::new(client, endpoint))
    }

    /// Returns the endpoint this gateway talks to.
    #[must_use]
    pub const fn endpoint(&self) -> &ArticleEndpoint {
        &self.endpoint
    }

    async fn get(&self, url: Url) -> Result<Response, ArticleError> {
        tracing::debug!(%url, "requesting articles");
        self.client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| network_error(&error))
    }
}

#[async_trait]
impl ArticleGateway for HttpArticleGateway {
    async fn list_articles(&self) -> Result<Vec<Article>, ArticleError> {
        let response = self.get(self.endpoint.collection_url().clone()).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArticleError::FetchFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| network_error(&error))?;
        decode_listing(&body)
    }

    async fn article(&self, id: &ArticleId) -> Result<Article, ArticleError> {
        let response = self.get(self.endpoint.item_url(id)?).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ArticleError::NotFound { id: id.to_string() });
        }
        if !status.is_success() {
            return Err(ArticleError::FetchFailed {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|error| ArticleError::Decode {
            message: error.to_string(),
        })
    }

    async fn delete_article(&self, id: &ArticleId) -> Result<(), ArticleError> {
        let url = self.endpoint.item_url(id)?;
        tracing::debug!(%url, "deleting article");

        let response = self
            .client
            .delete(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| network_error(&error))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ArticleError::DeleteFailed {
                id: id.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

/// Decodes a listing body.
///
/// Anything other than a JSON array is treated as "no data". Array elements
/// that are not JSON objects are a decode failure; mistyped fields inside an
/// object decode as absent.
pub(crate) fn decode_listing(body: &[u8]) -> Result<Vec<Article>, ArticleError> {
    let payload: Value = serde_json::from_slice(body).map_err(|error| ArticleError::Decode {
        message: error.to_string(),
    })?;

    let Value::Array(items) = payload else {
        return Ok(Vec::new());
    };

    items
        .into_iter()
        .map(serde_json::from_value::<Article>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| ArticleError::Decode {
            message: error.to_string(),
        })
}

fn network_error(error: &reqwest::Error) -> ArticleError {
    ArticleError::Network {
        message: error.to_string(),
    }
}

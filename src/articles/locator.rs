//! Article service endpoint resolution.

use url::Url;

use super::error::ArticleError;
use super::models::ArticleId;

/// Location of the article collection on the service.
///
/// The collection URL addresses `GET` listings; item URLs append the
/// identifier as a single percent-encoded path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleEndpoint {
    collection: Url,
}

impl ArticleEndpoint {
    /// Builds the endpoint from a service origin and a collection path.
    ///
    /// Any path already present on `base_url` is kept, so
    /// `http://host/api` with `/articles` yields `http://host/api/articles`.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::InvalidUrl`] when the base URL does not parse,
    /// uses a scheme other than `http`/`https`, or the path names no segment.
    pub fn parse(base_url: &str, articles_path: &str) -> Result<Self, ArticleError> {
        let mut collection = Url::parse(base_url.trim())
            .map_err(|error| ArticleError::InvalidUrl(format!("{base_url}: {error}")))?;

        if !matches!(collection.scheme(), "http" | "https") {
            return Err(ArticleError::InvalidUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        let segments: Vec<&str> = articles_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        if segments.is_empty() {
            return Err(ArticleError::InvalidUrl(format!(
                "articles path '{articles_path}' must name at least one segment"
            )));
        }

        collection
            .path_segments_mut()
            .map_err(|()| ArticleError::InvalidUrl(format!("{base_url}: cannot carry a path")))?
            .pop_if_empty()
            .extend(segments);
        collection.set_query(None);
        collection.set_fragment(None);

        Ok(Self { collection })
    }

    /// Returns the collection URL used for listings.
    #[must_use]
    pub const fn collection_url(&self) -> &Url {
        &self.collection
    }

    /// Returns the URL addressing a single article.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::InvalidUrl`] when the collection URL cannot
    /// carry further path segments.
    pub fn item_url(&self, id: &ArticleId) -> Result<Url, ArticleError> {
        let mut item = self.collection.clone();
        item.path_segments_mut()
            .map_err(|()| {
                ArticleError::InvalidUrl(format!("{}: cannot carry a path", self.collection))
            })?
            .push(id.as_str());
        Ok(item)
    }
}

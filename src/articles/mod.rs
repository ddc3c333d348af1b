//! Article service access.
//!
//! This module resolves the service endpoint, decodes article records, and
//! wraps `reqwest` behind the [`ArticleGateway`] trait so the list view can be
//! exercised without a network. Errors are mapped into [`ArticleError`]
//! variants that callers turn into placeholder rows or alerts.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod search;
pub mod statistics;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use error::ArticleError;
pub use gateway::{ArticleGateway, HttpArticleGateway};
pub use locator::ArticleEndpoint;
pub use models::{Article, ArticleId};
pub use search::ArticleSearch;
pub use statistics::{ArticleStatistics, CitationAverage};

#[cfg(test)]
pub use gateway::MockArticleGateway;

//! Scholar Desk library crate for browsing and pruning an article service.
//!
//! The library talks to a REST collection of bibliographic articles through
//! the [`ArticleGateway`] trait, projects listings into table content, and
//! drives load, refresh and delete interactions through [`ArticleListView`].
//! Display and user prompts are injected so the same view serves the terminal
//! host, an HTML mirror, and tests.

pub mod articles;
pub mod config;
pub mod telemetry;
pub mod view;

pub use articles::{
    Article, ArticleEndpoint, ArticleError, ArticleGateway, ArticleId, ArticleSearch,
    ArticleStatistics, CitationAverage, HttpArticleGateway,
};
pub use config::ScholarDeskConfig;
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
pub use view::{
    ArticleListView, DeleteOutcome, ListContent, ListSurface, LoadOutcome, MirroredSurface,
    UserPrompt,
};

//! The article list view: load, refresh, and per-row deletion.
//!
//! The view owns no article data. Each load replaces the surface content
//! with a placeholder, fetches the collection, and replaces it again with the
//! projected rows. Delete controls exist only for rows of the latest render.
//!
//! Loads may overlap. Every load takes a request token and only the response
//! to the newest token is rendered; older responses are discarded.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::content::ListContent;
use super::surface::{ListSurface, UserPrompt};
use crate::articles::{Article, ArticleError, ArticleGateway, ArticleId};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Message shown when the service rejects a deletion.
pub const DELETE_FAILED_MESSAGE: &str = "Delete failed";

/// What a load ended up displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Article rows were rendered.
    Rendered {
        /// Number of rows rendered.
        rows: usize,
    },
    /// The empty placeholder was rendered.
    Empty,
    /// The error placeholder was rendered.
    Failed,
    /// A newer load started before this one finished; nothing was rendered.
    Superseded,
}

/// What activating a delete control did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation.
    Declined,
    /// The service accepted the deletion and the list was reloaded.
    Deleted {
        /// Outcome of the reload.
        refresh: LoadOutcome,
    },
    /// The service rejected the deletion; the user was alerted.
    Failed,
    /// A deletion of the same article is still waiting for the service.
    InFlight,
    /// The current render has no delete control for that identifier.
    NoSuchControl,
}

/// List view over an article gateway, a display surface and a user prompt.
pub struct ArticleListView<G, S, P> {
    gateway: G,
    surface: S,
    prompt: P,
    telemetry: Arc<dyn TelemetrySink>,
    latest_request: AtomicU64,
    armed_controls: Mutex<HashSet<ArticleId>>,
    pending_deletes: Mutex<HashSet<ArticleId>>,
}

impl<G, S, P> ArticleListView<G, S, P>
where
    G: ArticleGateway,
    S: ListSurface,
    P: UserPrompt,
{
    /// Creates a view. Nothing is fetched until [`Self::initialise`].
    #[must_use]
    pub fn new(gateway: G, surface: S, prompt: P) -> Self {
        Self {
            gateway,
            surface,
            prompt,
            telemetry: Arc::new(NoopTelemetrySink),
            latest_request: AtomicU64::new(0),
            armed_controls: Mutex::new(HashSet::new()),
            pending_deletes: Mutex::new(HashSet::new()),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the gateway the view reads from.
    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Performs the initial load.
    pub async fn initialise(&self) -> LoadOutcome {
        self.load().await
    }

    /// Handles the refresh control.
    pub async fn refresh(&self) -> LoadOutcome {
        self.load().await
    }

    /// Fetches the collection and renders it.
    ///
    /// The loading placeholder is shown first. Failures never propagate: they
    /// become the error placeholder.
    pub async fn load(&self) -> LoadOutcome {
        let request = self.latest_request.fetch_add(1, Ordering::SeqCst).saturating_add(1);

        if let Err(error) = self.show(&ListContent::Loading) {
            tracing::warn!(request, "failed to show loading placeholder: {error}");
        }

        let result = self.gateway.list_articles().await;

        let latest = self.latest_request.load(Ordering::SeqCst);
        if latest != request {
            tracing::debug!(request, latest, "discarding stale article listing");
            self.telemetry
                .record(TelemetryEvent::StaleListingDiscarded { request, latest });
            return LoadOutcome::Superseded;
        }

        self.present(request, result)
    }

    /// Handles a delete control for `id`.
    ///
    /// Asks for confirmation, deletes, and reloads on success. A rejected
    /// deletion alerts the user and leaves the list as it is.
    pub async fn delete(&self, id: &ArticleId) -> DeleteOutcome {
        if !self.is_armed(id) {
            tracing::debug!(%id, "no delete control for article");
            return DeleteOutcome::NoSuchControl;
        }
        if self.is_pending(id) {
            tracing::debug!(%id, "deletion already in flight");
            return DeleteOutcome::InFlight;
        }

        if !self.prompt.confirm(&format!("Delete article {id}?")) {
            return DeleteOutcome::Declined;
        }
        if !self.mark_pending(id) {
            return DeleteOutcome::InFlight;
        }

        let result = self.gateway.delete_article(id).await;
        self.clear_pending(id);

        match result {
            Ok(()) => {
                tracing::info!(%id, "article deleted");
                self.telemetry
                    .record(TelemetryEvent::ArticleDeleted { id: id.to_string() });
                let refresh = self.load().await;
                DeleteOutcome::Deleted { refresh }
            }
            Err(error) => {
                tracing::warn!(%id, "article deletion failed: {error}");
                self.telemetry.record(TelemetryEvent::ArticleDeleteFailed {
                    id: id.to_string(),
                    message: error.to_string(),
                });
                self.prompt.notify(DELETE_FAILED_MESSAGE);
                DeleteOutcome::Failed
            }
        }
    }

    fn present(&self, request: u64, result: Result<Vec<Article>, ArticleError>) -> LoadOutcome {
        let outcome = match &result {
            Ok(articles) if articles.is_empty() => LoadOutcome::Empty,
            Ok(articles) => LoadOutcome::Rendered {
                rows: articles.len(),
            },
            Err(error) => {
                tracing::warn!(request, "article listing failed: {error}");
                LoadOutcome::Failed
            }
        };

        let content = ListContent::from_load(result);
        match self.show(&content) {
            Ok(()) => {
                self.record_outcome(request, &content);
                if let LoadOutcome::Rendered { rows } = outcome {
                    tracing::info!(request, rows, "article listing rendered");
                }
                outcome
            }
            Err(error) => {
                tracing::warn!(request, "article listing could not be rendered: {error}");
                let fallback = ListContent::failed(&error);
                if let Err(fallback_error) = self.show(&fallback) {
                    tracing::warn!(
                        request,
                        "error placeholder could not be rendered: {fallback_error}"
                    );
                }
                self.record_outcome(request, &fallback);
                LoadOutcome::Failed
            }
        }
    }

    fn record_outcome(&self, request: u64, content: &ListContent) {
        let event = match content {
            ListContent::Failed { message } => TelemetryEvent::ArticleLoadFailed {
                request,
                message: message.clone(),
            },
            ListContent::Rows(rows) => TelemetryEvent::ArticlesLoaded {
                request,
                count: rows.len(),
            },
            ListContent::Empty | ListContent::Loading => {
                TelemetryEvent::ArticlesLoaded { request, count: 0 }
            }
        };
        self.telemetry.record(event);
    }

    /// Renders content and re-arms delete controls to match it.
    fn show(&self, content: &ListContent) -> Result<(), ArticleError> {
        let rendered = self.surface.render(content);

        let mut armed = self
            .armed_controls
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        armed.clear();
        if rendered.is_ok() {
            armed.extend(content.delete_targets());
        }

        rendered
    }

    fn is_armed(&self, id: &ArticleId) -> bool {
        self.armed_controls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }

    fn is_pending(&self, id: &ArticleId) -> bool {
        self.pending_deletes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }

    fn mark_pending(&self, id: &ArticleId) -> bool {
        self.pending_deletes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone())
    }

    fn clear_pending(&self, id: &ArticleId) {
        self.pending_deletes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
    }
}

//! Scenario state and runtime/server initialisation for the article list BDD
//! tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use scholar_desk::view::test_support::{RecordingSurface, ScriptedPrompt};
use scholar_desk::{ArticleEndpoint, ArticleError, ArticleListView, HttpArticleGateway};
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Shared runtime wrapper that can be stored in an rstest-bdd Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub(crate) fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// View wired to the mock service, a recording surface and a scripted prompt.
pub(crate) type ScenarioView =
    ArticleListView<HttpArticleGateway, Arc<RecordingSurface>, Arc<ScriptedPrompt>>;

#[derive(ScenarioState, Default)]
pub(crate) struct ArticleListState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) surface: Slot<Arc<RecordingSurface>>,
    pub(crate) prompt: Slot<Arc<ScriptedPrompt>>,
    pub(crate) answers: Slot<Vec<bool>>,
    pub(crate) view: Slot<ScenarioView>,
}

/// Ensures the runtime and server are initialised in `ArticleListState`.
pub(crate) fn ensure_runtime_and_server(state: &ArticleListState) -> SharedRuntime {
    if state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if state.server.with_ref(|_| ()).is_none() {
        state.server.set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

impl ArticleListState {
    /// Builds the view against the mock server and stores it with its
    /// surface and prompt.
    pub(crate) fn build_view(&self) -> Result<(), ArticleError> {
        let server_url = self
            .server
            .with_ref(MockServer::uri)
            .ok_or_else(|| ArticleError::Configuration {
                message: "mock server URL missing".to_owned(),
            })?;
        let endpoint = ArticleEndpoint::parse(&server_url, "/articles")?;
        let gateway = HttpArticleGateway::with_timeout(endpoint, Duration::from_secs(5))?;

        let answers = self.answers.get().unwrap_or_default();
        let surface = Arc::new(RecordingSurface::default());
        let prompt = Arc::new(ScriptedPrompt::answering(answers));

        self.view.set(ArticleListView::new(
            gateway,
            Arc::clone(&surface),
            Arc::clone(&prompt),
        ));
        self.surface.set(surface);
        self.prompt.set(prompt);
        Ok(())
    }

    /// Returns the recording surface.
    pub(crate) fn surface(&self) -> Arc<RecordingSurface> {
        self.surface
            .get()
            .unwrap_or_else(|| panic!("view not built"))
    }

    /// Returns the scripted prompt.
    pub(crate) fn prompt(&self) -> Arc<ScriptedPrompt> {
        self.prompt
            .get()
            .unwrap_or_else(|| panic!("view not built"))
    }

    /// Counts requests the mock server received for `verb` on paths
    /// satisfying `matches_path`.
    pub(crate) fn count_requests(&self, verb: &str, matches_path: impl Fn(&str) -> bool) -> usize {
        let runtime = ensure_runtime_and_server(self);
        self.server
            .with_ref(|server| runtime.block_on(server.received_requests()))
            .flatten()
            .unwrap_or_default()
            .iter()
            .filter(|request| request.method.as_str() == verb && matches_path(request.url.path()))
            .count()
    }
}

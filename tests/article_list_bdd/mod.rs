//! Support modules for article list BDD tests.

pub(crate) mod state;

pub(crate) use state::{ArticleListState, ensure_runtime_and_server};

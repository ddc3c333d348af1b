//! Article list presentation.
//!
//! Rendering is split from fetching: [`ListContent`] is a pure projection of a
//! load result, [`table`] and [`html`] turn it into text or markup, and
//! [`ArticleListView`] drives loads and deletions against injected
//! [`ListSurface`] and [`UserPrompt`] capabilities.

pub mod content;
pub mod html;
pub mod list_view;
pub mod surface;
pub mod table;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use content::{ArticleRow, ListContent};
pub use html::render_markup;
pub use list_view::{ArticleListView, DELETE_FAILED_MESSAGE, DeleteOutcome, LoadOutcome};
pub use surface::{ListSurface, MirroredSurface, UserPrompt};
pub use table::render_table;

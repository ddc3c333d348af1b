//! Capabilities injected into the list view.
//!
//! [`ListSurface`] is the handle to the container that displays the table and
//! [`UserPrompt`] stands in for blocking confirm/alert dialogs. Both are
//! traits so hosts (terminal, HTML file, tests) supply their own.

use std::sync::Arc;

use super::content::ListContent;
use crate::articles::ArticleError;

/// Container that displays the article table.
///
/// Every call fully replaces what was shown before.
#[cfg_attr(test, mockall::automock)]
pub trait ListSurface: Send + Sync {
    /// Replaces the displayed content.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError`] when the content cannot be rendered or
    /// written.
    fn render(&self, content: &ListContent) -> Result<(), ArticleError>;
}

/// Blocking user interaction.
#[cfg_attr(test, mockall::automock)]
pub trait UserPrompt: Send + Sync {
    /// Asks a yes/no question and waits for the answer.
    fn confirm(&self, message: &str) -> bool;

    /// Shows a message the user must acknowledge.
    fn notify(&self, message: &str);
}

impl<T: ListSurface + ?Sized> ListSurface for Arc<T> {
    fn render(&self, content: &ListContent) -> Result<(), ArticleError> {
        (**self).render(content)
    }
}

impl<T: UserPrompt + ?Sized> UserPrompt for Arc<T> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

/// Renders to a primary surface and a mirror.
///
/// Both surfaces always receive the content; the primary surface's error
/// takes precedence when both fail.
#[derive(Debug, Clone)]
pub struct MirroredSurface<Primary, Mirror> {
    primary: Primary,
    mirror: Mirror,
}

impl<Primary, Mirror> MirroredSurface<Primary, Mirror> {
    /// Pairs two surfaces.
    #[must_use]
    pub const fn new(primary: Primary, mirror: Mirror) -> Self {
        Self { primary, mirror }
    }
}

impl<Primary, Mirror> ListSurface for MirroredSurface<Primary, Mirror>
where
    Primary: ListSurface,
    Mirror: ListSurface,
{
    fn render(&self, content: &ListContent) -> Result<(), ArticleError> {
        let primary = self.primary.render(content);
        let mirror = self.mirror.render(content);
        primary.and(mirror)
    }
}

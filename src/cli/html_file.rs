//! HTML mirror of the article table.
//!
//! The mirror file plays the part of the page's `list` container: every
//! render overwrites it with the table-body markup.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use scholar_desk::view::render_markup;
use scholar_desk::{ArticleError, ListContent, ListSurface};

/// Surface that writes table-body markup to a file.
#[derive(Debug)]
pub struct HtmlFileSurface {
    dir: Dir,
    file_name: String,
    path: Utf8PathBuf,
}

impl HtmlFileSurface {
    /// Opens the directory that will hold `path`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::InvalidArgument`] when `path` names no file
    /// and [`ArticleError::Io`] when the directory cannot be opened.
    pub fn create(path: &Utf8Path) -> Result<Self, ArticleError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ArticleError::InvalidArgument {
                argument: format!("HTML output '{path}' has no file name"),
            })?
            .to_owned();
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        Dir::create_ambient_dir_all(parent, ambient_authority()).map_err(|error| {
            ArticleError::Io {
                message: format!("failed to create HTML output directory '{parent}': {error}"),
            }
        })?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
            ArticleError::Io {
                message: format!("failed to open HTML output directory '{parent}': {error}"),
            }
        })?;

        Ok(Self {
            dir,
            file_name,
            path: path.to_path_buf(),
        })
    }

    /// Returns the mirror file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl ListSurface for HtmlFileSurface {
    fn render(&self, content: &ListContent) -> Result<(), ArticleError> {
        let markup = render_markup(content)?;
        self.dir
            .write(&self.file_name, markup)
            .map_err(|error| ArticleError::Io {
                message: format!("failed to write HTML output '{}': {error}", self.path),
            })
    }
}

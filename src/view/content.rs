//! Pure projection of a load result into displayable list content.
//!
//! Rendering never touches the transport: the list view hands the outcome of
//! a gateway call to [`ListContent::from_load`] and passes the result to a
//! surface. Display rules mirror what a browser would show for the same
//! JSON, so falsy values (missing, `null`, `""`, `0`) become empty cells.

use std::borrow::Cow;

use serde::Serialize;

use crate::articles::{Article, ArticleError, ArticleId};

/// Number of columns in the article table, including the action column.
pub const COLUMN_COUNT: usize = 5;

/// Placeholder text shown while a listing is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Placeholder text shown for an empty listing.
pub const EMPTY_TEXT: &str = "No articles";

/// Prefix of the placeholder text shown when a listing fails.
pub const ERROR_PREFIX: &str = "Error loading: ";

/// One rendered article row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleRow {
    /// Identifier cell.
    pub id: String,
    /// Title cell.
    pub paper_title: String,
    /// Authors cell.
    pub authors: String,
    /// Publication year cell.
    pub publication_year: String,
    /// Identifier carried by the row's delete control, if the row has one.
    #[serde(serialize_with = "serialize_delete_target")]
    pub delete_target: Option<ArticleId>,
}

impl From<&Article> for ArticleRow {
    fn from(article: &Article) -> Self {
        Self {
            id: article
                .id
                .as_ref()
                .map_or_else(String::new, ToString::to_string),
            paper_title: article.paper_title.clone().unwrap_or_default(),
            authors: article.authors.clone().unwrap_or_default(),
            publication_year: article
                .publication_year
                .filter(|year| *year != 0)
                .map_or_else(String::new, |year| year.to_string()),
            delete_target: article.id.clone(),
        }
    }
}

impl ArticleRow {
    /// Returns the four data cells in column order.
    #[must_use]
    pub fn cells(&self) -> [&str; 4] {
        [
            self.id.as_str(),
            self.paper_title.as_str(),
            self.authors.as_str(),
            self.publication_year.as_str(),
        ]
    }
}

fn serialize_delete_target<S>(target: &Option<ArticleId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(target.as_ref().map_or("", ArticleId::as_str))
}

/// Everything a surface can be asked to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    /// A listing request is in flight.
    Loading,
    /// The service returned no articles.
    Empty,
    /// The listing failed; holds the error message.
    Failed {
        /// Message shown after the error prefix.
        message: String,
    },
    /// One row per article, in response order.
    Rows(Vec<ArticleRow>),
}

impl ListContent {
    /// Projects the outcome of a listing request.
    #[must_use]
    pub fn from_load(result: Result<Vec<Article>, ArticleError>) -> Self {
        match result {
            Ok(articles) if articles.is_empty() => Self::Empty,
            Ok(articles) => Self::Rows(articles.iter().map(ArticleRow::from).collect()),
            Err(error) => Self::failed(&error),
        }
    }

    /// Builds the failure placeholder for an error.
    #[must_use]
    pub fn failed(error: &ArticleError) -> Self {
        Self::Failed {
            message: error.to_string(),
        }
    }

    /// Returns the placeholder text, or `None` when the content holds rows.
    #[must_use]
    pub fn placeholder_text(&self) -> Option<Cow<'static, str>> {
        match self {
            Self::Loading => Some(Cow::Borrowed(LOADING_TEXT)),
            Self::Empty => Some(Cow::Borrowed(EMPTY_TEXT)),
            Self::Failed { message } => Some(Cow::Owned(format!("{ERROR_PREFIX}{message}"))),
            Self::Rows(_) => None,
        }
    }

    /// Returns the rendered rows; placeholders have none.
    #[must_use]
    pub fn rows(&self) -> &[ArticleRow] {
        match self {
            Self::Rows(rows) => rows,
            Self::Loading | Self::Empty | Self::Failed { .. } => &[],
        }
    }

    /// Number of table rows a surface shows for this content.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::Loading | Self::Empty | Self::Failed { .. } => 1,
        }
    }

    /// Identifiers of the delete controls this content creates.
    #[must_use]
    pub fn delete_targets(&self) -> Vec<ArticleId> {
        self.rows()
            .iter()
            .filter_map(|row| row.delete_target.clone())
            .collect()
    }
}

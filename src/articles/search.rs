//! Client-side filtering of an article listing.

use super::models::Article;

/// Filters applied to a listing. Every filter that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSearch {
    /// Case-insensitive substring of the author list.
    pub author: Option<String>,
    /// Earliest publication year to keep.
    pub min_year: Option<i32>,
    /// Smallest citation count to keep.
    pub min_citations: Option<i64>,
}

impl ArticleSearch {
    /// Whether no filter is set, in which case every article matches.
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.author.is_none() && self.min_year.is_none() && self.min_citations.is_none()
    }

    /// Tests one article against the filters.
    ///
    /// Articles without authors or a year never match a filter on that field.
    /// A missing citation count counts as zero.
    #[must_use]
    pub fn matches(&self, article: &Article) -> bool {
        self.matches_author(article)
            && self.matches_year(article)
            && self.matches_citations(article)
    }

    /// Keeps the matching articles in listing order.
    #[must_use]
    pub fn filter(&self, articles: &[Article]) -> Vec<Article> {
        articles
            .iter()
            .filter(|article| self.matches(article))
            .cloned()
            .collect()
    }

    fn matches_author(&self, article: &Article) -> bool {
        let Some(needle) = self.author.as_deref().map(str::trim) else {
            return true;
        };
        if needle.is_empty() {
            return true;
        }

        article
            .authors
            .as_deref()
            .is_some_and(|authors| authors.to_lowercase().contains(&needle.to_lowercase()))
    }

    fn matches_year(&self, article: &Article) -> bool {
        self.min_year.is_none_or(|min_year| {
            article
                .publication_year
                .is_some_and(|year| year >= min_year)
        })
    }

    fn matches_citations(&self, article: &Article) -> bool {
        self.min_citations
            .is_none_or(|minimum| article.citation_count.unwrap_or(0) >= minimum)
    }
}

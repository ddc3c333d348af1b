//! Aggregate figures computed over an article listing.

use std::collections::BTreeMap;
use std::fmt;

use super::models::Article;

/// Summary of a listing: article and citation totals plus a year histogram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleStatistics {
    /// Number of articles in the listing.
    pub total_articles: usize,
    /// Sum of recorded citations; articles without a count contribute zero.
    pub total_citations: i64,
    /// Mean citations per article over the whole listing.
    pub average_citations: CitationAverage,
    /// Articles per publication year, ascending. Undated articles are skipped.
    pub year_distribution: BTreeMap<i32, usize>,
}

impl ArticleStatistics {
    /// Computes statistics for the given articles.
    #[must_use]
    pub fn from_articles(articles: &[Article]) -> Self {
        let mut year_distribution = BTreeMap::new();
        for year in articles.iter().filter_map(|article| article.publication_year) {
            *year_distribution.entry(year).or_insert(0) += 1;
        }

        let total_citations = articles
            .iter()
            .filter_map(|article| article.citation_count)
            .fold(0_i64, i64::saturating_add);

        Self {
            total_articles: articles.len(),
            total_citations,
            average_citations: CitationAverage::of(total_citations, articles.len()),
            year_distribution,
        }
    }
}

/// A mean citation count kept in hundredths, rounded half away from zero.
///
/// Displays with two decimals, e.g. `3.33`. An empty listing averages `0.00`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CitationAverage {
    hundredths: i64,
}

impl CitationAverage {
    /// Averages `total` citations over `count` articles.
    #[must_use]
    pub fn of(total: i64, count: usize) -> Self {
        let articles = i64::try_from(count).unwrap_or(i64::MAX);
        let doubled = articles.saturating_mul(2);
        let scaled = total.saturating_mul(200);
        let rounded = if scaled < 0 {
            scaled.saturating_sub(articles)
        } else {
            scaled.saturating_add(articles)
        };

        Self {
            hundredths: rounded.checked_div(doubled).unwrap_or(0),
        }
    }

    /// Builds an average from a value already expressed in hundredths.
    #[must_use]
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self { hundredths }
    }

    /// The average multiplied by one hundred.
    #[must_use]
    pub const fn hundredths(self) -> i64 {
        self.hundredths
    }
}

impl fmt::Display for CitationAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.hundredths < 0 { "-" } else { "" };
        let magnitude = self.hundredths.unsigned_abs();
        let whole = magnitude.checked_div(100).unwrap_or(0);
        let fraction = magnitude.checked_rem(100).unwrap_or(0);
        write!(f, "{sign}{whole}.{fraction:02}")
    }
}

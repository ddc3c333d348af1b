//! Output formatting for the `show`, `stats` and `search` commands.

use std::io::{self, Write};

use scholar_desk::{Article, ArticleError, ArticleStatistics};

const MISSING: &str = "-";

/// Writes every field of one article.
pub fn write_article_detail<W: Write>(
    writer: &mut W,
    article: &Article,
) -> Result<(), ArticleError> {
    let id = article.id.as_ref().map_or(MISSING, |id| id.as_str());
    let year = article
        .publication_year
        .map_or_else(|| MISSING.to_owned(), |year| year.to_string());
    let citations = article
        .citation_count
        .map_or_else(|| MISSING.to_owned(), |count| count.to_string());
    let created = article
        .created_at
        .map_or_else(|| MISSING.to_owned(), |date| date.to_string());
    let updated = article
        .updated_at
        .map_or_else(|| MISSING.to_owned(), |date| date.to_string());

    let fields: [(&str, &str); 10] = [
        ("ID", id),
        ("Title", text_or_missing(article.paper_title.as_deref())),
        ("Authors", text_or_missing(article.authors.as_deref())),
        ("Year", &year),
        ("Journal", text_or_missing(article.journal.as_deref())),
        ("Publisher", text_or_missing(article.publisher.as_deref())),
        ("Citations", &citations),
        ("URL", text_or_missing(article.article_url.as_deref())),
        ("Created", &created),
        ("Updated", &updated),
    ];

    for (label, value) in fields {
        writeln!(writer, "{label:<10} {value}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes listing statistics.
pub fn write_statistics<W: Write>(
    writer: &mut W,
    statistics: &ArticleStatistics,
) -> Result<(), ArticleError> {
    writeln!(writer, "Articles:  {}", statistics.total_articles).map_err(|e| io_error(&e))?;
    writeln!(writer, "Citations: {}", statistics.total_citations).map_err(|e| io_error(&e))?;
    writeln!(writer, "Average:   {}", statistics.average_citations).map_err(|e| io_error(&e))?;

    if statistics.year_distribution.is_empty() {
        return Ok(());
    }

    writeln!(writer, "By year:").map_err(|e| io_error(&e))?;
    for (year, count) in &statistics.year_distribution {
        writeln!(writer, "  {year}: {count}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the articles kept by a search, one per line, after a match count.
pub fn write_search_results<W: Write>(
    writer: &mut W,
    matches: &[Article],
    searched: usize,
) -> Result<(), ArticleError> {
    writeln!(writer, "Matches: {} of {searched}", matches.len()).map_err(|e| io_error(&e))?;

    for article in matches {
        let id = article.id.as_ref().map_or(MISSING, |id| id.as_str());
        let year = article
            .publication_year
            .map_or_else(|| MISSING.to_owned(), |year| year.to_string());
        let citations = article.citation_count.unwrap_or(0);
        writeln!(
            writer,
            "  {id} | {} | {} | {year} | {citations} citations",
            text_or_missing(article.paper_title.as_deref()),
            text_or_missing(article.authors.as_deref()),
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn text_or_missing(value: Option<&str>) -> &str {
    value.filter(|text| !text.is_empty()).unwrap_or(MISSING)
}

/// Converts an I/O error to an [`ArticleError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ArticleError {
    ArticleError::io(error)
}

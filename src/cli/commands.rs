//! Line commands accepted by the terminal session.

use std::str::FromStr;

use scholar_desk::{ArticleError, ArticleId, ArticleSearch};

/// Usage hint printed for `help` and for unrecognised input.
pub const USAGE: &str = concat!(
    "Commands: refresh (r), delete <id> (d), show <id> (s), stats, ",
    "search [author=<text>] [year=<n>] [min-citations=<n>], help (h), quit (q)"
);

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reload the article list.
    Refresh,
    /// Activate the delete control of an article.
    Delete(ArticleId),
    /// Print one article in full.
    Show(ArticleId),
    /// Print statistics for the current collection.
    Stats,
    /// Print the articles matching the filters.
    Search(ArticleSearch),
    /// Print the usage hint.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::InvalidArgument`] for unknown commands and for
    /// `delete`/`show` without an identifier. Malformed `search` filters are
    /// rejected the same way.
    pub fn parse(line: &str) -> Result<Option<Self>, ArticleError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        if matches!(verb.to_ascii_lowercase().as_str(), "search" | "find") {
            return parse_search(words).map(|search| Some(Self::Search(search)));
        }
        let argument = words.next();

        let command = match verb.to_ascii_lowercase().as_str() {
            "refresh" | "r" => Self::Refresh,
            "delete" | "d" => Self::Delete(required_id(verb, argument)?),
            "show" | "s" => Self::Show(required_id(verb, argument)?),
            "stats" => Self::Stats,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => {
                return Err(ArticleError::InvalidArgument {
                    argument: format!("unknown command '{verb}'"),
                });
            }
        };

        Ok(Some(command))
    }
}

fn required_id(verb: &str, argument: Option<&str>) -> Result<ArticleId, ArticleError> {
    let value = argument.ok_or_else(|| ArticleError::InvalidArgument {
        argument: format!("'{verb}' needs an article identifier"),
    })?;
    ArticleId::parse(value)
}

/// Parses `key=value` filters. Words without `=` extend the previous value, so
/// `author=Ada Lovelace` names one author.
fn parse_search<'a>(words: impl Iterator<Item = &'a str>) -> Result<ArticleSearch, ArticleError> {
    let mut filters: Vec<(&str, String)> = Vec::new();
    for word in words {
        if let Some((key, value)) = word.split_once('=') {
            filters.push((key, value.to_owned()));
            continue;
        }
        let Some((_, value)) = filters.last_mut() else {
            return Err(invalid_filter(word));
        };
        value.push(' ');
        value.push_str(word);
    }

    let mut search = ArticleSearch::default();
    for (key, value) in filters {
        match key.to_ascii_lowercase().as_str() {
            "author" => search.author = Some(value),
            "year" => search.min_year = Some(filter_number(key, &value)?),
            "min-citations" | "citations" => {
                search.min_citations = Some(filter_number(key, &value)?);
            }
            _ => return Err(invalid_filter(key)),
        }
    }
    Ok(search)
}

fn filter_number<T: FromStr>(key: &str, value: &str) -> Result<T, ArticleError> {
    value
        .trim()
        .parse()
        .map_err(|_| ArticleError::InvalidArgument {
            argument: format!("'{key}' needs a whole number, got '{value}'"),
        })
}

fn invalid_filter(filter: &str) -> ArticleError {
    ArticleError::InvalidArgument {
        argument: format!("unknown search filter '{filter}'"),
    }
}

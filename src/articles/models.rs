//! Data models representing articles returned by the article service.
//!
//! The service owns the schema; this side treats every field as optional so a
//! partially populated record still renders. Every field is decoded
//! leniently: a value of the wrong JSON type becomes absent instead of failing
//! the listing.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use super::error::ArticleError;

/// Identifier of an article, carried in its canonical text form.
///
/// The service may encode identifiers as JSON numbers or strings; both decode
/// into the same representation so that `1` and `"1"` address the same
/// `DELETE /articles/1` resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(String);

impl ArticleId {
    /// Parses an identifier typed by a user or read from a control.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::InvalidArgument`] when the value is blank.
    pub fn parse(value: &str) -> Result<Self, ArticleError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ArticleError::InvalidArgument {
                argument: "article identifier must not be empty".to_owned(),
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for ArticleId {
    type Err = ArticleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArticleId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A bibliographic record held by the article service.
///
/// Only `id`, `paper_title`, `authors` and `publication_year` appear in the
/// list view; the remaining fields feed the detail and statistics commands.
/// A field whose JSON type does not fit decodes as absent rather than failing
/// the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    /// Service identifier. Absent when missing, `null`, `0` or `""`.
    #[serde(deserialize_with = "deserialize_present_id")]
    pub id: Option<ArticleId>,
    /// Paper title.
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub paper_title: Option<String>,
    /// Author list as a single display string.
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub authors: Option<String>,
    /// Publication year, from a JSON integer or a numeric string.
    #[serde(deserialize_with = "deserialize_lenient_integer")]
    pub publication_year: Option<i32>,
    /// Journal or venue name.
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub journal: Option<String>,
    /// Link to the article landing page.
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub article_url: Option<String>,
    /// Number of recorded citations, from a JSON integer or a numeric string.
    #[serde(deserialize_with = "deserialize_lenient_integer")]
    pub citation_count: Option<i64>,
    /// Publisher name.
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub publisher: Option<String>,
    /// Date the record was created, when sent as an ISO date.
    #[serde(deserialize_with = "deserialize_lenient_date")]
    pub created_at: Option<NaiveDate>,
    /// Date the record was last updated, when sent as an ISO date.
    #[serde(deserialize_with = "deserialize_lenient_date")]
    pub updated_at: Option<NaiveDate>,
}

/// Renders a JSON number the way a browser would display it, so `1.0` and
/// `1` name the same article.
fn canonical_number(number: &Number) -> String {
    let text = number.to_string();
    text.strip_suffix(".0")
        .map_or_else(|| text.clone(), str::to_owned)
}

/// Numeric zero and the empty string are falsy and name no article; the string
/// `"0"` is a real identifier.
fn present_id(value: Value) -> Option<ArticleId> {
    match value {
        Value::Number(number) => {
            let canonical = canonical_number(&number);
            (!matches!(canonical.as_str(), "0" | "-0")).then_some(ArticleId(canonical))
        }
        Value::String(text) => (!text.is_empty()).then_some(ArticleId(text)),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(canonical_number(&number)),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn integer_of<T>(value: &Value) -> Option<T>
where
    T: FromStr,
{
    match value {
        Value::Number(number) => canonical_number(number).parse().ok(),
        Value::String(text) => text.trim().parse().ok(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn deserialize_present_id<'de, D>(deserializer: D) -> Result<Option<ArticleId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(present_id))
}

fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(text_of))
}

fn deserialize_lenient_integer<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(integer_of))
}

fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|text| NaiveDate::from_str(text).ok()))
}

//! Fixture builders for article payloads shared with integration tests.

use serde_json::{Value, json};

/// Builds the JSON body of a single article as the service sends it.
#[must_use]
pub fn article_json(id: u64, title: &str, authors: &str, year: i32) -> Value {
    json!({
        "id": id,
        "paperTitle": title,
        "authors": authors,
        "publicationYear": year
    })
}

/// Builds a listing of `count` articles with identifiers starting at 1.
#[must_use]
pub fn listing_json(count: u64) -> Value {
    let articles: Vec<Value> = (1..=count)
        .map(|id| {
            article_json(
                id,
                &format!("Paper {id}"),
                &format!("Author {id}"),
                2000_i32.saturating_add(i32::try_from(id).unwrap_or(i32::MAX)),
            )
        })
        .collect();
    Value::Array(articles)
}

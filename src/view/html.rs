//! Table-body markup for hosts that embed the list in an HTML page.
//!
//! Markup is produced by a `minijinja` template registered under an `.html`
//! name, so every interpolated value is HTML-escaped by the engine.
//!
//! # Template Variables
//!
//! - `columns` - number of table columns (placeholder `colspan`)
//! - `placeholder` - placeholder text, or empty when rows are present
//! - `rows` - list of row objects with `id`, `paper_title`, `authors`,
//!   `publication_year` and `delete_target`

use minijinja::{Environment, context};

use super::content::{COLUMN_COUNT, ListContent};
use crate::articles::ArticleError;

const TEMPLATE_NAME: &str = "article_rows.html";

const ARTICLE_ROWS_TEMPLATE: &str = r#"{%- if placeholder -%}
<tr><td colspan="{{ columns }}">{{ placeholder }}</td></tr>
{%- else -%}
{%- for row in rows %}
<tr>
	<td>{{ row.id }}</td>
	<td>{{ row.paper_title }}</td>
	<td>{{ row.authors }}</td>
	<td>{{ row.publication_year }}</td>
	<td>{% if row.delete_target %}<button class="btn delete" data-id="{{ row.delete_target }}">Delete</button>{% endif %}</td>
</tr>
{%- endfor %}
{%- endif -%}"#;

/// Renders the `<tr>` elements for the list container.
///
/// # Errors
///
/// Returns [`ArticleError::Render`] if the template fails to compile or
/// render.
pub fn render_markup(content: &ListContent) -> Result<String, ArticleError> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, ARTICLE_ROWS_TEMPLATE)
        .map_err(|error| render_error(&error))?;

    let template = env
        .get_template(TEMPLATE_NAME)
        .map_err(|error| render_error(&error))?;

    let placeholder = content.placeholder_text().unwrap_or_default();
    template
        .render(context! {
            columns => COLUMN_COUNT,
            placeholder => &*placeholder,
            rows => content.rows(),
        })
        .map_err(|error| render_error(&error))
}

fn render_error(error: &minijinja::Error) -> ArticleError {
    ArticleError::Render {
        message: error.to_string(),
    }
}

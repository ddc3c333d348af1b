//! Plain-text table for terminal surfaces.
//!
//! Columns are padded by display width rather than byte length so titles in
//! non-Latin scripts stay aligned.

use unicode_width::UnicodeWidthStr;

use super::content::{ArticleRow, ListContent};

const HEADERS: [&str; 4] = ["ID", "Title", "Authors", "Year"];
const SEPARATOR: &str = " | ";
const DELETE_LABEL: &str = "[Delete]";

/// Renders list content as a terminal table.
///
/// Placeholders render as a single line; rows render below a header and a
/// rule, each ending with a `[Delete]` marker when the row has a control.
#[must_use]
pub fn render_table(content: &ListContent) -> String {
    if let Some(text) = content.placeholder_text() {
        return format!("{text}\n");
    }

    let rows = content.rows();
    let widths = column_widths(rows);

    let mut output = String::new();
    push_line(&mut output, &widths, HEADERS, "");
    let rule_width = widths
        .iter()
        .sum::<usize>()
        .saturating_add(SEPARATOR.len().saturating_mul(HEADERS.len()))
        .saturating_add(DELETE_LABEL.len());
    output.push_str(&"-".repeat(rule_width));
    output.push('\n');

    for row in rows {
        let action = if row.delete_target.is_some() {
            DELETE_LABEL
        } else {
            ""
        };
        push_line(&mut output, &widths, row.cells(), action);
    }

    output
}

fn column_widths(rows: &[ArticleRow]) -> [usize; 4] {
    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn push_line(output: &mut String, widths: &[usize; 4], cells: [&str; 4], action: &str) {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
        line.push_str(SEPARATOR);
    }
    line.push_str(action);

    output.push_str(line.trim_end());
    output.push('\n');
}

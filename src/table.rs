// 📋 Console Table - Tabular stdout rendering for mixed scalar values
//
// Renders an ordered list of values as a two-column table: a row index and
// the value itself. Mirrors the shape of the tabular console display the
// walkthrough was written against: an "(index)" column and a "Values"
// column, one row per value, in input order.

use serde_json::Value;
use tabled::{Table, Tabled};

/// One table row: position in the input sequence plus the rendered cell.
#[derive(Tabled)]
struct ValueRow {
    #[tabled(rename = "(index)")]
    index: usize,

    #[tabled(rename = "Values")]
    value: String,
}

/// Cell text for a single value.
///
/// `Null` marks an absent value and renders as an empty cell. Strings render
/// raw, without JSON quoting. Everything else uses its JSON rendering.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Render an ordered sequence of values as a console table.
///
/// Row order is input order. The returned string has no trailing newline;
/// callers add one when writing it out.
pub fn render_values(values: &[Value]) -> String {
    let rows: Vec<ValueRow> = values
        .iter()
        .enumerate()
        .map(|(index, value)| ValueRow {
            index,
            value: cell_text(value),
        })
        .collect();

    Table::new(rows).to_string()
}

// ============================================================================
// TESTS
// ============================================================================

//! CLI commands for arcadekit

pub mod dispatch;
pub mod game;
pub mod text;

use serde_json::Value;

use crate::cli::OutputFormat;

/// Print a command result.
///
/// Human output prints strings and numbers bare, arrays one item per line,
/// and nothing for null. JSON output wraps the value as `{"value": ...}`.
pub fn emit(format: OutputFormat, value: Value) {
    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "value": value })),
        OutputFormat::Human => {
            if let Some(text) = render_human(&value) {
                println!("{}", text);
            }
        }
    }
}

fn render_human(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(render_human)
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        other => Some(other.to_string()),
    }
}

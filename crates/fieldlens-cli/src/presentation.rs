use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde_json::Value;

use fieldlens_types::Field;

/// Human preview of a field value: scalars verbatim, composites summarized.
pub fn summarize_value(value: &Value) -> String {
    let preview = match value {
        Value::Array(items) => format!("{} item(s)", items.len()),
        Value::Object(_) => "Details".to_string(),
        other => pretty_value(other),
    };

    if preview.is_empty() {
        "(empty)".to_string()
    } else {
        preview
    }
}

fn pretty_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Truncate a preview for table display.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Comma-separated page list, or a dash when the field has no regions.
pub fn page_list(field: &Field) -> String {
    let pages = field.pages();
    if pages.is_empty() {
        return "-".to_string();
    }
    pages
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Highlight a label when stdout is a terminal; plain text otherwise.
pub fn emphasize(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.green().bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn print_fields_table(fields: &[Field]) {
    println!("{:<28} {:<50} PAGES", "FIELD", "VALUE");
    println!("{}", "-".repeat(88));

    for field in fields {
        println!(
            "{:<28} {:<50} {}",
            truncate(&field.name, 28),
            truncate(&summarize_value(&field.value), 50),
            page_list(field)
        );
    }
}

use amazing_numbers_core::{Property, QueryError, Report, ResultEntry};

/// Trait for rendering query results.
///
/// A `ReportFormatter` decides how a single-number [`Report`], each
/// [`ResultEntry`] of a range scan, and a rejected request are turned into
/// printable lines.
pub trait ReportFormatter {
    fn report(&self, report: &Report) -> String;

    fn entry(&self, entry: &ResultEntry) -> String;

    fn error(&self, error: &QueryError) -> String;

    /// Whether a blank line follows every answer.
    fn separated(&self) -> bool;
}

/// Human readable output, the way the console menu describes it.
#[derive(Debug, Default)]
pub struct TextFormatter;

/// One JSON document per report or entry.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl ReportFormatter for TextFormatter {
    fn report(&self, report: &Report) -> String {
        let mut out = format!("Properties of {}", group_thousands(report.number));
        for (property, holds) in &report.properties {
            out.push_str(&format!("\n{:>12}: {}", property.label(), holds));
        }
        out
    }

    fn entry(&self, entry: &ResultEntry) -> String {
        let labels: Vec<&str> = entry.satisfied.iter().map(Property::label).collect();
        format!(
            "{:>15} is {}",
            group_thousands(entry.number),
            labels.join(", ")
        )
    }

    fn error(&self, error: &QueryError) -> String {
        error.to_string()
    }

    fn separated(&self) -> bool {
        true
    }
}

impl ReportFormatter for JsonFormatter {
    fn report(&self, report: &Report) -> String {
        serde_json::to_string(report).unwrap_or_else(|e| error_document(&e))
    }

    fn entry(&self, entry: &ResultEntry) -> String {
        serde_json::to_string(entry).unwrap_or_else(|e| error_document(&e))
    }

    fn error(&self, error: &QueryError) -> String {
        error_document(error)
    }

    fn separated(&self) -> bool {
        false
    }
}

/// `{"error": "<message>"}`, escaped whatever the message holds.
fn error_document(error: &dyn std::fmt::Display) -> String {
    serde_json::json!({ "error": error.to_string() }).to_string()
}

/// `1234567` → `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

//! Pretty output formatting.

use inventario_core::{Locale, Page};
use serde_json::Value;

use crate::client::Record;

/// Format a single JSON value without quotes around strings.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Format a record for display, one field per line.
pub fn format_record(record: &Record) -> String {
    let mut fields = record.iter();
    let Some((first_key, first_value)) = fields.next() else {
        return "(empty record)".to_string();
    };

    let mut output = format!("{}: {}", first_key, format_value(first_value));
    for (key, value) in fields {
        output.push_str(&format!("\n  {}: {}", key, format_value(value)));
    }
    output
}

/// Format a list of records under a heading.
pub fn format_records(heading: &str, records: &[Record]) -> String {
    if records.is_empty() {
        return format!("No {} found.", heading.to_lowercase());
    }
    let mut output = format!("{} ({})\n", heading, records.len());
    output.push_str(&"-".repeat(40));
    for record in records {
        output.push_str(&format!("\n{}", format_record(record)));
        output.push('\n');
    }
    output
}

/// Format a route table entry for display.
pub fn format_route(path: &str, page: Page, locale: Locale) -> String {
    format!("{:<16} {:<14} {}", path, page.to_string(), page.title(locale))
}

/// Format route table entries for display.
pub fn format_routes(routes: &[(&str, Page)], locale: Locale) -> String {
    let mut output = format!("ROUTES ({})\n", routes.len());
    output.push_str(&"-".repeat(40));
    for (path, page) in routes {
        output.push_str(&format!("\n{}", format_route(path, *page, locale)));
    }
    output
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_format_record() {
        let output = format_record(&record(json!({ "id": 7, "nombre": "Ana", "email": null })));
        assert_eq!(output, "email: -\n  id: 7\n  nombre: Ana");
    }

    #[test]
    fn test_format_empty_record() {
        assert_eq!(format_record(&Record::new()), "(empty record)");
    }

    #[test]
    fn test_format_records_empty() {
        assert_eq!(format_records("USERS", &[]), "No users found.");
    }

    #[test]
    fn test_format_records_heading() {
        let output = format_records("DEVICES", &[record(json!({ "serial": "X1" }))]);
        assert!(output.starts_with("DEVICES (1)\n"));
        assert!(output.contains("serial: X1"));
    }

    #[test]
    fn test_format_route() {
        let output = format_route("/carga", Page::CsvUpload, Locale::En);
        assert!(output.starts_with("/carga"));
        assert!(output.contains("csv-upload"));
        assert!(output.ends_with("CSV upload"));
    }

    #[test]
    fn test_format_routes_lists_all() {
        let routes = inventario_core::routes().sorted();
        let output = format_routes(&routes, Locale::Es);
        assert!(output.starts_with("ROUTES (4)"));
        assert!(output.contains("Consulta de usuarios"));
    }
}

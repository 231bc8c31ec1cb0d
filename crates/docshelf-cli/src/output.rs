//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use docshelf_core::error::AppError;
use docshelf_core::types::Envelope;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON envelope
    Json,
}

/// Print a list of rows in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(&items),
    }
}

/// Print one item: key-value lines for tables, an envelope for JSON
pub fn print_item<T: Serialize>(item: &T, fields: &[(&str, String)], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            for (key, value) in fields {
                print_kv(key, value);
            }
        }
        OutputFormat::Json => print_json(item),
    }
}

/// Report a completed mutation
pub fn print_done<T: Serialize>(item: &T, msg: &str, format: OutputFormat) {
    match format {
        OutputFormat::Table => print_success(msg),
        OutputFormat::Json => print_json(item),
    }
}

/// Report a failed command
pub fn print_failure(err: &AppError, format: OutputFormat) {
    match format {
        OutputFormat::Table => print_error(&err.to_string()),
        OutputFormat::Json => print_envelope(&Envelope::<()>::failure(err)),
    }
}

/// Print a payload wrapped in a success envelope
pub fn print_json<T: Serialize>(data: &T) {
    print_envelope(&Envelope::ok(data));
}

fn print_envelope<T: Serialize>(envelope: &Envelope<T>) {
    let json = serde_json::to_string_pretty(envelope)
        .unwrap_or_else(|e| format!(r#"{{"status":false,"error":"{e}"}}"#));
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<16} {}", format!("{key}:"), value);
}

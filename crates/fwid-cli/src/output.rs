//! Output formatting for fwid (table, json)

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ASCII table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Context for output rendering
pub struct OutputContext {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl OutputContext {
    pub fn new(format: OutputFormat, no_color: bool, quiet: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { format, quiet }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Print a success message (unless in quiet mode)
    pub fn success(&self, msg: &str) {
        if !self.quiet && !self.is_json() {
            println!("{}", msg.green());
        }
    }

    /// Print an info message (unless in quiet mode)
    pub fn info(&self, msg: &str) {
        if !self.quiet && !self.is_json() {
            println!("{}", msg);
        }
    }

    /// Print a warning message
    pub fn warn(&self, msg: &str) {
        eprintln!("{}", msg.yellow());
    }

    /// Print an error message
    pub fn error(&self, msg: &str) {
        eprintln!("{}", msg.red());
    }

    /// Print rows as a table, or as a JSON array
    pub fn print<T: Tabled + Serialize>(&self, data: &[T]) {
        match self.format {
            OutputFormat::Table => {
                if data.is_empty() {
                    if !self.quiet {
                        println!("No data");
                    }
                } else {
                    println!("{}", Table::new(data));
                }
            }
            OutputFormat::Json => self.print_json(data),
        }
    }

    /// Print any serializable value as pretty JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) {
        println!(
            "{}",
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
        );
    }

    /// Print key-value pairs (table mode only)
    pub fn print_kv(&self, pairs: &[(&str, String)]) {
        if self.is_json() {
            return;
        }
        for (key, value) in pairs {
            println!("{}: {}", key.bold(), value);
        }
    }
}

/// Join displayable items with ", ", or "-" when empty
pub fn join_or_dash<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let joined: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join(", ")
    }
}

// =============================================================================
// Display types for various commands
// =============================================================================

/// Parsed firmware string for the codes command
#[derive(Debug, Tabled, Serialize)]
pub struct CodeRow {
    #[tabled(rename = "Firmware")]
    pub firmware: String,
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Platform")]
    pub platform: String,
    #[tabled(rename = "Part")]
    pub part: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "ISO Date")]
    pub iso_date: String,
}

/// Observed platform codes for one ECU
#[derive(Debug, Tabled, Serialize)]
pub struct EvidenceRow {
    #[tabled(rename = "ECU")]
    pub ecu: String,
    #[tabled(rename = "Codes")]
    pub codes: String,
}

/// Candidate model for the match command
#[derive(Debug, Tabled, Serialize)]
pub struct CandidateRow {
    #[tabled(rename = "Model")]
    pub model: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Bus")]
    pub generation: String,
    #[tabled(rename = "Powertrain")]
    pub powertrain: String,
}

/// Catalog entry for the list command
#[derive(Debug, Tabled, Serialize)]
pub struct ModelRow {
    #[tabled(rename = "Model")]
    pub model: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Bus")]
    pub generation: String,
    #[tabled(rename = "Powertrain")]
    pub powertrain: String,
    #[tabled(rename = "ECUs")]
    pub ecus: usize,
    #[tabled(rename = "Ambiguous With")]
    pub ambiguous_with: String,
}

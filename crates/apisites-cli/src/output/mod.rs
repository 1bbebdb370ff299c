//! # Output Formatting
//!
//! - **Text**: colored, human-readable listings
//! - **JSON**: a single pretty-printed document
//! - **JSONL**: one compact JSON object per line

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use apisites_core::SiteRecord;

/// Output format options supported by the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty JSON document
    Json,
    /// Newline-delimited JSON
    Jsonl,
}

/// Print `items` as one JSON array or as JSON lines.
pub fn print_json_items<T: Serialize>(items: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Jsonl => {
            for item in items {
                println!("{}", serde_json::to_string(item)?);
            }
        },
        OutputFormat::Json | OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(items)?);
        },
    }
    Ok(())
}

/// Print one value as JSON (compact for JSONL).
pub fn print_json_value<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Jsonl {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Text rendering of a numbered site row.
pub fn site_line(index: usize, site: &SiteRecord) -> String {
    let mut line = format!(
        "{:>3}. {} {}\n     {}",
        index,
        site.name.bold(),
        format!("({})", site.id).bright_black(),
        site.api_url.cyan()
    );
    if let Some(detail) = &site.detail_url {
        line.push_str(&format!("\n     detail: {}", detail.cyan()));
    }
    line
}

//! Lookup command implementation for searching the active profile

use anyhow::Result;
use colored::Colorize;

use crate::output::{OutputFormat, print_json_items};
use crate::utils::context::active_profile;

/// Execute the lookup command
pub fn execute(query: &str, profile: Option<&str>, format: OutputFormat, quiet: bool) -> Result<()> {
    let active = active_profile(profile)?;
    let results = active.sites.search(query);

    if format != OutputFormat::Text {
        let out: Vec<_> = results
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.site.id,
                    "name": r.site.name,
                    "apiUrl": r.site.api_url,
                    "detailUrl": r.site.detail_url,
                    "score": r.score,
                    "matchField": r.match_field,
                })
            })
            .collect();
        return print_json_items(&out, format);
    }

    if results.is_empty() {
        if !quiet {
            println!("No matches found for '{query}'");
        }
        return Ok(());
    }

    println!(
        "Found {} match{}:\n",
        results.len(),
        if results.len() == 1 { "" } else { "es" }
    );
    for (i, result) in results.iter().enumerate() {
        println!(
            "{}. {} {} {}",
            i + 1,
            result.site.name.bold(),
            format!("({})", result.site.id).bright_black(),
            format!("[{} {}]", result.match_field, result.score).bright_black()
        );
        println!("   {}", result.site.api_url.cyan());
    }
    Ok(())
}

//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::output::{OutputFormat, print_json_items, site_line};
use crate::utils::context::active_profile;

/// Execute the list command
pub fn execute(profile: Option<&str>, format: OutputFormat, quiet: bool) -> Result<()> {
    let active = active_profile(profile)?;

    if format != OutputFormat::Text {
        let sites: Vec<_> = active.sites.iter().collect();
        return print_json_items(&sites, format);
    }

    if active.sites.is_empty() {
        if !quiet {
            println!("Profile '{}' has no sites", active.name);
        }
        return Ok(());
    }

    if !quiet {
        println!(
            "{} sites in profile {}:\n",
            active.sites.len(),
            active.name.green()
        );
    }
    for (i, site) in active.sites.iter().enumerate() {
        println!("{}", site_line(i + 1, site));
    }
    Ok(())
}

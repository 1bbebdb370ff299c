//! Show command implementation

use anyhow::Result;
use colored::Colorize;

use crate::output::{OutputFormat, print_json_value};
use crate::utils::context::active_profile;

/// Execute the show command for one site id
pub fn execute(id: &str, profile: Option<&str>, format: OutputFormat) -> Result<()> {
    let active = active_profile(profile)?;
    let site = active.sites.require(id)?;

    if format != OutputFormat::Text {
        return print_json_value(site, format);
    }

    println!("{} {}", site.name.bold(), format!("({})", site.id).bright_black());
    println!("  api:    {}", site.api_url.cyan());
    match &site.detail_url {
        Some(detail) => println!("  detail: {}", detail.cyan()),
        None => println!("  detail: {}", "-".bright_black()),
    }
    Ok(())
}

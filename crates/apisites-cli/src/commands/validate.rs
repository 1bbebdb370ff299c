//! Validate command implementation

use anyhow::{Result, bail};
use apisites_core::validate_registry;
use colored::Colorize;

use crate::output::{OutputFormat, print_json_value};
use crate::utils::context::active_profile;

/// Execute the validate command. Fails when any issue is found.
pub fn execute(profile: Option<&str>, format: OutputFormat, quiet: bool) -> Result<()> {
    let active = active_profile(profile)?;
    let issues = validate_registry(&active.sites);

    if format == OutputFormat::Text {
        if issues.is_empty() {
            if !quiet {
                println!(
                    "{} {} sites in '{}' look valid",
                    "✓".green(),
                    active.sites.len(),
                    active.name
                );
            }
        } else {
            for issue in &issues {
                println!(
                    "{} {} [{}]: {}",
                    "✗".red(),
                    issue.id,
                    issue.field,
                    issue.message
                );
            }
        }
    } else {
        let report = serde_json::json!({
            "profile": active.name,
            "sites": active.sites.len(),
            "valid": issues.is_empty(),
            "issues": issues,
        });
        print_json_value(&report, format)?;
    }

    if !issues.is_empty() {
        bail!(
            "{} validation issue{} in profile '{}'",
            issues.len(),
            if issues.len() == 1 { "" } else { "s" },
            active.name
        );
    }
    Ok(())
}

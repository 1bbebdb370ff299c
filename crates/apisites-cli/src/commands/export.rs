//! Export command: the site table exactly as it is handed to a host

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::utils::context::active_profile;

/// Execute the export command
pub fn execute(profile: Option<&str>, output_file: Option<&Path>, quiet: bool) -> Result<()> {
    let active = active_profile(profile)?;
    let json = active.sites.to_json_pretty()?;

    match output_file {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !quiet {
                eprintln!(
                    "Exported {} sites from '{}' to {}",
                    active.sites.len(),
                    active.name,
                    path.display()
                );
            }
        },
        None => println!("{json}"),
    }
    Ok(())
}

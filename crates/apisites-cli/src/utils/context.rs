//! Profile resolution shared by every command.

use anyhow::{Context, Result};
use apisites_core::{Config, SiteRegistry, profiles};

/// The site table a command operates on.
pub struct ActiveProfile {
    pub name: String,
    pub sites: SiteRegistry,
}

/// Resolve the profile named on the command line, or the configured default.
pub fn active_profile(requested: Option<&str>) -> Result<ActiveProfile> {
    let config = Config::load().context("Failed to load configuration")?;
    let name = requested.map_or_else(|| config.defaults.profile.clone(), str::to_string);

    let sites = profiles::resolve(&name, Some(config.paths.profiles_dir.as_path()))
        .with_context(|| format!("Failed to resolve profile '{name}'"))?;
    tracing::debug!("Profile '{}' resolved with {} sites", name, sites.len());

    Ok(ActiveProfile { name, sites })
}

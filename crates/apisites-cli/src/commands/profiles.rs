//! Profile listing and default selection

use anyhow::{Context, Result};
use apisites_core::{Config, profiles};
use colored::Colorize;

use crate::output::{OutputFormat, print_json_items};

/// Execute the profiles command
pub fn list(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let names = profiles::available_profiles(Some(config.paths.profiles_dir.as_path()))?;

    if format != OutputFormat::Text {
        let out: Vec<_> = names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": name,
                    "builtin": profiles::BUILTIN_PROFILES.contains(&name.as_str()),
                    "default": *name == config.defaults.profile,
                })
            })
            .collect();
        return print_json_items(&out, format);
    }

    for name in &names {
        let marker = if *name == config.defaults.profile {
            "*".green().to_string()
        } else {
            " ".to_string()
        };
        let origin = if profiles::BUILTIN_PROFILES.contains(&name.as_str()) {
            "built-in".bright_black()
        } else {
            "file".bright_black()
        };
        println!("{marker} {name} {origin}");
    }
    Ok(())
}

/// Execute the use command: resolve the profile, then persist it as default
pub fn use_profile(name: &str, quiet: bool) -> Result<()> {
    let mut config = Config::load()?;
    let sites = profiles::resolve(name, Some(config.paths.profiles_dir.as_path()))
        .with_context(|| format!("Cannot switch to profile '{name}'"))?;

    config.defaults.profile = name.to_string();
    config.save()?;
    tracing::info!("Default profile set to '{}'", name);

    if !quiet {
        println!(
            "Default profile is now {} ({} sites)",
            name.green(),
            sites.len()
        );
    }
    Ok(())
}

//! Load command: register the active profile with an in-process host
//!
//! The CLI plays the host. Its [`SiteCatalog`] is the aggregation hook and the
//! refresh hook re-renders the catalogue once the merge is done.

use anyhow::Result;
use apisites_core::{LoadOutcome, RefreshHook, SiteAggregator, SiteCatalog, load_registry};
use colored::Colorize;

use crate::output::{OutputFormat, print_json_value, site_line};
use crate::utils::context::active_profile;

/// Execute the load command
///
/// A detached load reports the missing aggregation hook and still succeeds.
pub fn execute(
    profile: Option<&str>,
    no_refresh: bool,
    detached: bool,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let active = active_profile(profile)?;
    let mut catalog = SiteCatalog::new();
    let mut refresh_requested = false;
    let mut refresh = || refresh_requested = true;

    let aggregator: Option<&mut dyn SiteAggregator> = if detached {
        None
    } else {
        Some(&mut catalog)
    };
    let refresh_hook: Option<&mut dyn RefreshHook> = if no_refresh {
        None
    } else {
        Some(&mut refresh)
    };

    let outcome = load_registry(active.sites, aggregator, refresh_hook);

    if format != OutputFormat::Text {
        let report = match &outcome {
            LoadOutcome::Merged { sites, refreshed } => serde_json::json!({
                "profile": active.name,
                "merged": true,
                "sites": sites,
                "refreshed": refreshed,
                "catalog": catalog.registry(),
            }),
            LoadOutcome::Skipped(err) => serde_json::json!({
                "profile": active.name,
                "merged": false,
                "error": {
                    "category": err.category(),
                    "message": err.to_string(),
                },
            }),
        };
        return print_json_value(&report, format);
    }

    match outcome {
        LoadOutcome::Merged { sites, refreshed } => {
            if !quiet {
                println!(
                    "Registered {} sites from {} ({} in catalogue)",
                    sites,
                    active.name.green(),
                    catalog.len()
                );
            }
            if refreshed && refresh_requested {
                for (i, site) in catalog.registry().iter().enumerate() {
                    println!("{}", site_line(i + 1, site));
                }
            }
        },
        LoadOutcome::Skipped(err) => {
            if !quiet {
                println!("{} {}", "Nothing registered:".yellow(), err);
            }
        },
    }
    Ok(())
}

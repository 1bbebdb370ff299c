//! # CLI Structure and Argument Parsing
//!
//! `apisites` is a small host for site tables: it resolves a profile, merges it
//! into its own catalogue through the loader, and renders the result.
//!
//! ```bash
//! apisites list
//! apisites show ffzy -f json
//! apisites lookup 资源
//! apisites export > sites.json
//! apisites --profile mirror validate
//! apisites load --no-refresh
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::cli_args::FormatArg;

/// Main CLI structure for the `apisites` command
#[derive(Parser, Clone, Debug)]
#[command(name = "apisites")]
#[command(version)]
#[command(about = "apisites - Inspect and register API site tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Profile to use instead of the configured default
    #[arg(long, global = true, env = "APISITES_PROFILE")]
    pub profile: Option<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List every site in the active profile, in table order
    List {
        #[command(flatten)]
        format: FormatArg,
    },

    /// Show a single site
    Show {
        /// Site id (e.g. `ffzy`)
        id: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Fuzzy search sites by id, name or API host
    Lookup {
        /// Search text
        query: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Print the site table in the host wire format (`{ id: { api, name, detail? } }`)
    Export {
        /// Write to this file instead of stdout
        #[arg(short = 'o', long = "output-file")]
        output_file: Option<PathBuf>,
    },

    /// Check that every site has an id, a name and absolute URLs
    Validate {
        #[command(flatten)]
        format: FormatArg,
    },

    /// List available profiles
    Profiles {
        #[command(flatten)]
        format: FormatArg,
    },

    /// Make a profile the configured default
    Use {
        /// Profile name
        name: String,
    },

    /// Register the active profile with an in-process host catalogue
    Load {
        /// Do not register a refresh hook
        #[arg(long)]
        no_refresh: bool,

        /// Run without an aggregation hook (reports a missing dependency)
        #[arg(long)]
        detached: bool,

        #[command(flatten)]
        format: FormatArg,
    },
}

impl Commands {
    /// Format flag of the command, when it has one.
    pub fn format(&self) -> Option<&FormatArg> {
        match self {
            Self::List { format }
            | Self::Show { format, .. }
            | Self::Lookup { format, .. }
            | Self::Validate { format }
            | Self::Profiles { format }
            | Self::Load { format, .. } => Some(format),
            Self::Export { .. } | Self::Use { .. } => None,
        }
    }
}

//! apisites CLI - inspect site tables and register them with a host catalogue

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;
mod utils;

use cli::{Cli, Commands};
use output::OutputFormat;
use utils::logging::initialize_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let profile = cli.profile.as_deref();
    let format = cli
        .command
        .format()
        .map_or(OutputFormat::Text, utils::cli_args::FormatArg::resolve);

    match &cli.command {
        Commands::List { .. } => commands::list::execute(profile, format, cli.quiet),
        Commands::Show { id, .. } => commands::show::execute(id, profile, format),
        Commands::Lookup { query, .. } => {
            commands::lookup::execute(query, profile, format, cli.quiet)
        },
        Commands::Export { output_file } => {
            commands::export::execute(profile, output_file.as_deref(), cli.quiet)
        },
        Commands::Validate { .. } => commands::validate::execute(profile, format, cli.quiet),
        Commands::Profiles { .. } => commands::profiles::list(format),
        Commands::Use { name } => commands::profiles::use_profile(name, cli.quiet),
        Commands::Load {
            no_refresh,
            detached,
            ..
        } => commands::load::execute(profile, *no_refresh, *detached, format, cli.quiet),
    }
}

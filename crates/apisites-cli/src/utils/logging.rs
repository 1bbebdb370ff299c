//! Logging initialization and configuration.
//!
//! Sets up the tracing subscriber and color control from CLI flags and
//! environment variables.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;
use crate::output::OutputFormat;

/// Initialize the logging subsystem based on CLI flags.
///
/// Machine-readable output (JSON/JSONL) raises the level to ERROR unless
/// verbose logging was requested explicitly.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let mut level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let machine_output = cli
        .command
        .format()
        .is_some_and(|f| matches!(f.resolve(), OutputFormat::Json | OutputFormat::Jsonl));
    if machine_output && !cli.verbose {
        level = Level::ERROR;
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    if cli.no_color || env_no_color || machine_output {
        color_control::set_override(false);
    }
    Ok(())
}

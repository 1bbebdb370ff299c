pub mod cli_args;
pub mod context;
pub mod logging;

//! Pull request notifier command line.
//!
//! One invocation handles one CI event: configuration comes from the environment, drivers are
//! wired from it, then the selected command runs to completion.

#![warn(clippy::all)]

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use prnotify_config::Config;
use prnotify_logging::configure_logging;
use shadow_rs::shadow;
use tracing::info;

pub(crate) mod args;
mod commands;
mod config_validator;
#[cfg(test)]
mod testutils;

shadow!(build);

/// Name, version and commit of the running binary.
pub fn get_version_data() -> String {
    format!(
        "{} {} ({}@{}, {})",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::BRANCH,
        build::SHORT_COMMIT,
        build::COMMIT_DATE_3339
    )
}

/// Parse arguments, load and validate configuration, then run the command.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string());
    configure_logging(&config)?;
    config_validator::validate_configuration(&config)?;

    info!(version = %get_version_data(), message = "Starting");

    CommandExecutor::parse_args(config, args)
}

//! Configuration command definitions.
//!
//! This module defines CLI commands related to configuration management.

use crate::commands::params::{COMMAND_CONFIG, COMMAND_INIT, COMMAND_PATH, COMMAND_SHOW};
use clap::Command;

/// Create the config command with all its subcommands.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Configuration management")
        .subcommand_required(true)
        .subcommand(Command::new(COMMAND_PATH).about("Show configuration file path"))
        .subcommand(Command::new(COMMAND_SHOW).about("Show the effective configuration"))
        .subcommand(
            Command::new(COMMAND_INIT).about("Write the effective configuration to the configuration file"),
        )
}

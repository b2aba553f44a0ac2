//! Folder command definitions.

use crate::commands::params::{
    id_parameter, max_depth_parameter, COMMAND_FOLDER, COMMAND_LIST, PARAMETER_ROOT,
};
use clap::Command;

/// Create the folder command with all its subcommands.
pub fn folder_command() -> Command {
    Command::new(COMMAND_FOLDER)
        .about("Browse folders")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List all folders below a root folder, depth first")
                .visible_alias("ls")
                .arg(id_parameter(PARAMETER_ROOT, "Id of the root folder"))
                .arg(max_depth_parameter()),
        )
}

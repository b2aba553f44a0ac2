//! Batch command definitions.

use crate::commands::params::{
    id_parameter, max_depth_parameter, no_save_parameter, COMMAND_PURGE, COMMAND_SWEEP,
    PARAMETER_FOLDER,
};
use clap::Command;

/// Create the sweep command with all its subcommands.
pub fn sweep_command() -> Command {
    Command::new(COMMAND_SWEEP)
        .about("Apply an operation to every Webi document below a folder")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_PURGE)
                .about("Purge the data providers of every document and save it")
                .arg(id_parameter(PARAMETER_FOLDER, "Id of the root folder"))
                .arg(no_save_parameter())
                .arg(max_depth_parameter()),
        )
}

//! Universe command definitions.

use crate::commands::params::{
    id_parameter, COMMAND_CONNECTION, COMMAND_GET, COMMAND_LIST, COMMAND_REPORTS,
    COMMAND_UNIVERSE, PARAMETER_ID,
};
use clap::Command;

const UNIVERSE_ID_HELP: &str = "Numeric id (SI_ID) of the universe";

/// Create the universe command with all its subcommands.
pub fn universe_command() -> Command {
    Command::new(COMMAND_UNIVERSE)
        .about("Resolve universes and the reports built on them")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List universes")
                .visible_alias("ls"),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get universe type, name and CUID")
                .arg(id_parameter(PARAMETER_ID, UNIVERSE_ID_HELP)),
        )
        .subcommand(
            Command::new(COMMAND_REPORTS)
                .about("List the reports that use a universe")
                .arg(id_parameter(PARAMETER_ID, UNIVERSE_ID_HELP)),
        )
        .subcommand(
            Command::new(COMMAND_CONNECTION)
                .about("Get the id of the connection a universe uses")
                .arg(id_parameter(PARAMETER_ID, UNIVERSE_ID_HELP)),
        )
}

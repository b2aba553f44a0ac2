//! Data provider command definitions.

use crate::commands::params::{
    id_parameter, COMMAND_DATA_PROVIDER, COMMAND_GET, COMMAND_LIST, COMMAND_PURGE,
    PARAMETER_DOCUMENT, PARAMETER_ID,
};
use clap::Command;

const DOCUMENT_ID_HELP: &str = "Id of the Webi document";
const DATA_PROVIDER_ID_HELP: &str = "Id of the data provider (e.g. DP0)";

/// Create the data provider command with all its subcommands.
pub fn data_provider_command() -> Command {
    Command::new(COMMAND_DATA_PROVIDER)
        .about("Inspect and purge the data providers of a document")
        .visible_alias("dp")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the data providers of a document")
                .visible_alias("ls")
                .arg(id_parameter(PARAMETER_DOCUMENT, DOCUMENT_ID_HELP)),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get data provider details")
                .arg(id_parameter(PARAMETER_DOCUMENT, DOCUMENT_ID_HELP))
                .arg(id_parameter(PARAMETER_ID, DATA_PROVIDER_ID_HELP)),
        )
        .subcommand(
            Command::new(COMMAND_PURGE)
                .about("Purge the data of one data provider")
                .arg(id_parameter(PARAMETER_DOCUMENT, DOCUMENT_ID_HELP))
                .arg(id_parameter(PARAMETER_ID, DATA_PROVIDER_ID_HELP)),
        )
}

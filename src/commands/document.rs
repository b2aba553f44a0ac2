//! Document command definitions.
//!
//! This module defines CLI commands operating on Web Intelligence documents.

use crate::commands::params::{
    id_parameter, max_depth_parameter, name_parameter, no_save_parameter, recursive_parameter,
    COMMAND_DELETE, COMMAND_DOCUMENT, COMMAND_GET, COMMAND_LIST, COMMAND_PURGE, COMMAND_SAVE,
    COMMAND_STATUS, PARAMETER_FOLDER, PARAMETER_ID,
};
use clap::Command;

const DOCUMENT_ID_HELP: &str = "Id of the Webi document";

/// Create the document command with all its subcommands.
pub fn document_command() -> Command {
    Command::new(COMMAND_DOCUMENT)
        .about("Manage Webi documents")
        .visible_alias("doc")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the Webi documents of a folder")
                .visible_alias("ls")
                .arg(id_parameter(PARAMETER_FOLDER, "Id of the folder"))
                .arg(recursive_parameter())
                .arg(max_depth_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get document details")
                .arg(id_parameter(PARAMETER_ID, DOCUMENT_ID_HELP)),
        )
        .subcommand(
            Command::new(COMMAND_STATUS)
                .about("Get the document state, detecting objects that are not Webi documents")
                .arg(id_parameter(PARAMETER_ID, DOCUMENT_ID_HELP)),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a document")
                .visible_alias("rm")
                .arg(id_parameter(PARAMETER_ID, DOCUMENT_ID_HELP)),
        )
        .subcommand(
            Command::new(COMMAND_SAVE)
                .about("Save (overwrite) a document, preserving comments")
                .arg(id_parameter(PARAMETER_ID, DOCUMENT_ID_HELP))
                .arg(name_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_PURGE)
                .about("Purge all data providers of a document and save it")
                .arg(id_parameter(PARAMETER_ID, DOCUMENT_ID_HELP))
                .arg(no_save_parameter()),
        )
}

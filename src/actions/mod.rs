//! Handlers for the CLI commands.
//!
//! Every handler that talks to the platform logs on, runs its operation and
//! logs off again, even when the operation failed. Nothing is kept between
//! invocations.

use clap::ArgMatches;
use serde::Serialize;
use tracing::trace;

use crate::commands::params::{
    COMMAND_CONFIG, COMMAND_CONNECTION, COMMAND_DATA_PROVIDER, COMMAND_DELETE, COMMAND_DOCUMENT,
    COMMAND_FOLDER, COMMAND_GET, COMMAND_INIT, COMMAND_LIST, COMMAND_PATH, COMMAND_PURGE,
    COMMAND_REPORTS, COMMAND_SAVE, COMMAND_SHOW, COMMAND_STATUS, COMMAND_SWEEP, COMMAND_UNIVERSE,
};
use crate::error::CliError;
use crate::format::{CsvRecordProducer, Formattable};
use crate::model::ObjectId;

pub mod config;
pub mod documents;
pub mod folders;
pub mod session;
pub mod sweep;
pub mod universes;

fn unsupported(matches: &ArgMatches) -> CliError {
    let name = matches.subcommand_name().unwrap_or("unknown");
    CliError::UnsupportedSubcommand(name.to_string())
}

/// Dispatch the parsed command line to its handler.
pub async fn execute_command(matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Dispatching {:?}", matches.subcommand_name());

    match matches.subcommand() {
        Some((COMMAND_FOLDER, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, m)) => folders::list_folders(m).await,
            _ => Err(unsupported(sub_matches)),
        },
        Some((COMMAND_DOCUMENT, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, m)) => documents::list_documents(m).await,
            Some((COMMAND_GET, m)) => documents::print_document_details(m).await,
            Some((COMMAND_STATUS, m)) => documents::print_document_status(m).await,
            Some((COMMAND_DELETE, m)) => documents::delete_document(m).await,
            Some((COMMAND_SAVE, m)) => documents::save_document(m).await,
            Some((COMMAND_PURGE, m)) => documents::purge_document(m).await,
            _ => Err(unsupported(sub_matches)),
        },
        Some((COMMAND_DATA_PROVIDER, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, m)) => documents::list_data_providers(m).await,
            Some((COMMAND_GET, m)) => documents::print_data_provider_details(m).await,
            Some((COMMAND_PURGE, m)) => documents::purge_data_provider(m).await,
            _ => Err(unsupported(sub_matches)),
        },
        Some((COMMAND_UNIVERSE, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, m)) => universes::list_universes(m).await,
            Some((COMMAND_GET, m)) => universes::print_universe_details(m).await,
            Some((COMMAND_REPORTS, m)) => universes::print_related_reports(m).await,
            Some((COMMAND_CONNECTION, m)) => universes::print_connection_id(m).await,
            _ => Err(unsupported(sub_matches)),
        },
        Some((COMMAND_SWEEP, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_PURGE, m)) => sweep::purge_folder_tree(m).await,
            _ => Err(unsupported(sub_matches)),
        },
        Some((COMMAND_CONFIG, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_PATH, _)) => config::print_configuration_path(),
            Some((COMMAND_SHOW, m)) => config::print_configuration(m),
            Some((COMMAND_INIT, m)) => config::initialize_configuration(m),
            _ => Err(unsupported(sub_matches)),
        },
        _ => Err(unsupported(matches)),
    }
}

/// Print a formattable value in the format requested on the command line.
pub(crate) fn print_output<T: Formattable>(
    sub_matches: &ArgMatches,
    value: &T,
) -> Result<(), CliError> {
    let format = session::get_format_parameter_value(sub_matches)?;
    println!("{}", value.format(&format)?.trim_end());
    Ok(())
}

/// Outcome of an operation that only reports success or failure
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub id: ObjectId,
    pub operation: &'static str,
    pub success: bool,
}

impl Outcome {
    pub fn new(id: &ObjectId, operation: &'static str, success: bool) -> Self {
        Self {
            id: id.clone(),
            operation,
            success,
        }
    }

    /// Turn a failed outcome into an error after it has been printed
    pub fn into_result(self) -> Result<(), CliError> {
        if self.success {
            Ok(())
        } else {
            Err(CliError::OperationFailed(format!(
                "Failed to {} {}",
                self.operation, self.id
            )))
        }
    }
}

impl CsvRecordProducer for Outcome {
    fn csv_header() -> Vec<String> {
        vec!["ID".to_string(), "OPERATION".to_string(), "SUCCESS".to_string()]
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.to_string(),
            self.operation.to_string(),
            self.success.to_string(),
        ]]
    }
}

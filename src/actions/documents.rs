//! Document and data provider commands.
//!
//! The client reports document failures as sentinels (`None`, `false`,
//! `Unknown`). Here they become a non-zero exit after the outcome is printed.

use clap::ArgMatches;
use tracing::trace;

use crate::actions::session::{effective_configuration, logoff, logon, required_id};
use crate::actions::{print_output, Outcome};
use crate::commands::params::{
    PARAMETER_DOCUMENT, PARAMETER_FOLDER, PARAMETER_ID, PARAMETER_NAME, PARAMETER_NO_SAVE,
    PARAMETER_RECURSIVE,
};
use crate::error::CliError;
use crate::model::DocumentStatus;

pub async fn list_documents(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Listing documents...");

    let folder_id = required_id(sub_matches, PARAMETER_FOLDER)?;
    let recursive = sub_matches.get_flag(PARAMETER_RECURSIVE);
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let result = if recursive {
        client.list_documents_recursive(&folder_id).await
    } else {
        Ok(client.list_documents(&folder_id).await)
    };
    logoff(client).await;

    print_output(sub_matches, &result?)
}

pub async fn print_document_details(sub_matches: &ArgMatches) -> Result<(), CliError> {
    let document_id = required_id(sub_matches, PARAMETER_ID)?;
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let details = client.get_document_details(&document_id).await;
    logoff(client).await;

    match details {
        Some(details) => print_output(sub_matches, &details),
        None => Err(CliError::OperationFailed(format!(
            "Could not read the details of document {}",
            document_id
        ))),
    }
}

pub async fn print_document_status(sub_matches: &ArgMatches) -> Result<(), CliError> {
    let document_id = required_id(sub_matches, PARAMETER_ID)?;
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let status = client.get_document_status(&document_id).await;
    logoff(client).await;

    print_output(sub_matches, &status)?;
    match status {
        DocumentStatus::Unknown => Err(CliError::OperationFailed(format!(
            "Could not determine the status of document {}",
            document_id
        ))),
        _ => Ok(()),
    }
}

pub async fn delete_document(sub_matches: &ArgMatches) -> Result<(), CliError> {
    let document_id = required_id(sub_matches, PARAMETER_ID)?;
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let deleted = client.delete_document(&document_id).await;
    logoff(client).await;

    let outcome = Outcome::new(&document_id, "delete", deleted);
    print_output(sub_matches, &outcome)?;
    outcome.into_result()
}

pub async fn save_document(sub_matches: &ArgMatches) -> Result<(), CliError> {
    let document_id = required_id(sub_matches, PARAMETER_ID)?;
    let name = sub_matches
        .get_one::<String>(PARAMETER_NAME)
        .cloned()
        .ok_or_else(|| CliError::MissingRequiredArgument(PARAMETER_NAME.to_string()))?;
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let saved = client.save_document(&document_id, &name).await;
    logoff(client).await;

    let outcome = Outcome::new(&document_id, "save", saved);
    print_output(sub_matches, &outcome)?;
    outcome.into_result()
}

pub async fn purge_document(sub_matches: &ArgMatches) -> Result<(), CliError> {
    let document_id = required_id(sub_matches, PARAMETER_ID)?;
    let save = !sub_matches.get_flag(PARAMETER_NO_SAVE);
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let report = client.purge_document(&document_id, save).await;
    logoff(client).await;

    print_output(sub_matches, &report)?;
    if !report.failed.is_empty() || (save && !report.saved) {
        return Err(CliError::OperationFailed(format!(
            "Purging document {} did not complete",
            document_id
        )));
    }
    Ok(())
}

pub async fn list_data_providers(sub_matches: &ArgMatches) -> Result<(), CliError> {
    let document_id = required_id(sub_matches, PARAMETER_DOCUMENT)?;
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let providers = client.list_data_providers(&document_id).await;
    logoff(client).await;

    print_output(sub_matches, &providers)
}

pub async fn print_data_provider_details(sub_matches: &ArgMatches) -> Result<(), CliError> {
    let document_id = required_id(sub_matches, PARAMETER_DOCUMENT)?;
    let provider_id = required_id(sub_matches, PARAMETER_ID)?;
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let details = client
        .get_data_provider_details(&document_id, &provider_id)
        .await;
    logoff(client).await;

    match details {
        Some(details) => print_output(sub_matches, &details),
        None => Err(CliError::OperationFailed(format!(
            "Could not read data provider {} of document {}",
            provider_id, document_id
        ))),
    }
}

pub async fn purge_data_provider(sub_matches: &ArgMatches) -> Result<(), CliError> {
    let document_id = required_id(sub_matches, PARAMETER_DOCUMENT)?;
    let provider_id = required_id(sub_matches, PARAMETER_ID)?;
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let purged = client.purge_data_provider(&document_id, &provider_id).await;
    logoff(client).await;

    let outcome = Outcome::new(&provider_id, "purge", purged);
    print_output(sub_matches, &outcome)?;
    outcome.into_result()
}

//! Batch operations over every Webi document below a folder.

use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, trace, warn};

use crate::actions::print_output;
use crate::actions::session::{effective_configuration, logoff, logon, required_id};
use crate::client::BoClient;
use crate::commands::params::{PARAMETER_FOLDER, PARAMETER_NO_SAVE};
use crate::error::{CliError, ClientError};
use crate::model::{DocumentStatus, ObjectId, PurgeReport};

pub async fn purge_folder_tree(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Purging all documents below a folder...");

    let folder_id = required_id(sub_matches, PARAMETER_FOLDER)?;
    let save = !sub_matches.get_flag(PARAMETER_NO_SAVE);
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let result = purge_documents_below(&client, &folder_id, save).await;
    logoff(client).await;

    let reports = result?;
    print_output(sub_matches, &reports)?;

    let incomplete = reports
        .iter()
        .filter(|report| !report.failed.is_empty() || (save && !report.saved))
        .count();
    if incomplete > 0 {
        return Err(CliError::OperationFailed(format!(
            "{} of {} document(s) were not purged completely",
            incomplete,
            reports.len()
        )));
    }
    Ok(())
}

/// Purge every Webi document in `folder_id` and its sub-folders.
///
/// Objects that turn out not to be Webi documents are skipped. A failure on
/// one document is recorded in its report and the sweep moves on.
async fn purge_documents_below(
    client: &BoClient,
    folder_id: &ObjectId,
    save: bool,
) -> Result<Vec<PurgeReport>, ClientError> {
    let documents = client.list_documents_recursive(folder_id).await?;
    info!("Found {} document(s) below folder {}", documents.len(), folder_id);

    let progress = ProgressBar::new(documents.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
    {
        progress.set_style(style.progress_chars("#>-"));
    }

    let mut reports = Vec::with_capacity(documents.len());
    for document_id in &documents {
        progress.set_message(document_id.to_string());
        match client.get_document_status(document_id).await {
            DocumentStatus::NotWebiDocument => {
                info!("Skipping {}: not a Webi document", document_id);
            }
            status => {
                if status == DocumentStatus::Unknown {
                    warn!("Status of {} is unknown, purging anyway", document_id);
                }
                reports.push(client.purge_document(document_id, save).await);
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(reports)
}

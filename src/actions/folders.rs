use clap::ArgMatches;
use tracing::trace;

use crate::actions::print_output;
use crate::actions::session::{effective_configuration, logoff, logon, required_id};
use crate::commands::params::PARAMETER_ROOT;
use crate::error::CliError;

pub async fn list_folders(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Listing folders...");

    let root = required_id(sub_matches, PARAMETER_ROOT)?;
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let result = client.list_folders_recursive(&root).await;
    logoff(client).await;

    let folders = result?;
    trace!("Found {} folder(s) below {}", folders.len(), root);
    print_output(sub_matches, &folders)
}

use clap::ArgMatches;
use tracing::trace;

use crate::actions::print_output;
use crate::actions::session::{effective_configuration, logoff, logon, required_id};
use crate::commands::params::PARAMETER_ID;
use crate::error::CliError;

pub async fn list_universes(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Listing universes...");

    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let result = client.list_universes().await;
    logoff(client).await;

    print_output(sub_matches, &result?)
}

pub async fn print_universe_details(sub_matches: &ArgMatches) -> Result<(), CliError> {
    let universe_id = required_id(sub_matches, PARAMETER_ID)?;
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let result = client.get_universe_details(&universe_id).await;
    logoff(client).await;

    print_output(sub_matches, &result?)
}

pub async fn print_related_reports(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Resolving reports of a universe...");

    let universe_id = required_id(sub_matches, PARAMETER_ID)?;
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let result = client.get_related_reports(&universe_id).await;
    logoff(client).await;

    print_output(sub_matches, &result?)
}

pub async fn print_connection_id(sub_matches: &ArgMatches) -> Result<(), CliError> {
    let universe_id = required_id(sub_matches, PARAMETER_ID)?;
    let configuration = effective_configuration(sub_matches)?;
    let client = logon(sub_matches, &configuration).await?;

    let result = client.get_connection_id(&universe_id).await;
    logoff(client).await;

    print_output(sub_matches, &result?)
}

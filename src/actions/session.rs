//! Resolution of the effective configuration, output format and logon for a
//! single CLI invocation.

use clap::ArgMatches;
use tracing::{debug, trace, warn};

use crate::client::BoClient;
use crate::commands::params::{
    PARAMETER_FORMAT, PARAMETER_HEADERS, PARAMETER_HOST, PARAMETER_INSECURE, PARAMETER_MAX_DEPTH,
    PARAMETER_PASSWORD, PARAMETER_PORT, PARAMETER_PRETTY, PARAMETER_PROTOCOL, PARAMETER_TRUSTED,
    PARAMETER_USERNAME,
};
use crate::configuration::Configuration;
use crate::error::CliError;
use crate::format::{OutputFormat, OutputFormatOptions};
use crate::model::ObjectId;

/// Output format and options from the global format parameters.
pub fn get_format_parameter_value(sub_matches: &ArgMatches) -> Result<OutputFormat, CliError> {
    trace!("Resolving output format options...");

    let format = sub_matches
        .get_one::<String>(PARAMETER_FORMAT)
        .map(String::as_str)
        .unwrap_or(crate::format::JSON);
    let options = OutputFormatOptions {
        with_headers: sub_matches.get_flag(PARAMETER_HEADERS),
        pretty: sub_matches.get_flag(PARAMETER_PRETTY),
    };

    Ok(OutputFormat::from_string_with_options(format, options)?)
}

/// The configuration file (or defaults) with command-line overrides applied.
pub fn effective_configuration(sub_matches: &ArgMatches) -> Result<Configuration, CliError> {
    let configuration = Configuration::load_or_default()?;
    Ok(apply_overrides(configuration, sub_matches))
}

pub(crate) fn apply_overrides(
    mut configuration: Configuration,
    sub_matches: &ArgMatches,
) -> Configuration {
    if let Some(protocol) = optional::<String>(sub_matches, PARAMETER_PROTOCOL) {
        configuration.server.protocol = protocol;
    }
    if let Some(host) = optional::<String>(sub_matches, PARAMETER_HOST) {
        configuration.server.host = host;
    }
    if let Some(port) = optional::<u16>(sub_matches, PARAMETER_PORT) {
        configuration.server.port = port;
    }
    if optional::<bool>(sub_matches, PARAMETER_INSECURE).unwrap_or(false) {
        configuration.server.accept_invalid_certs = true;
    }
    if let Some(username) = optional::<String>(sub_matches, PARAMETER_USERNAME) {
        configuration.username = username;
    }
    if let Some(depth) = optional::<usize>(sub_matches, PARAMETER_MAX_DEPTH) {
        configuration.max_folder_depth = depth;
    }
    configuration
}

/// Value of an argument that may not be defined for every subcommand
fn optional<T: Clone + Send + Sync + 'static>(sub_matches: &ArgMatches, name: &str) -> Option<T> {
    sub_matches.try_get_one::<T>(name).ok().flatten().cloned()
}

/// A mandatory object id argument.
pub fn required_id(sub_matches: &ArgMatches, name: &str) -> Result<ObjectId, CliError> {
    optional::<String>(sub_matches, name)
        .map(ObjectId::from)
        .ok_or_else(|| CliError::MissingRequiredArgument(name.to_string()))
}

/// Create a client and log on with the trusted or the password flow.
pub async fn logon(
    sub_matches: &ArgMatches,
    configuration: &Configuration,
) -> Result<BoClient, CliError> {
    let mut client = BoClient::from_configuration(configuration)?;
    let username = configuration.username.as_str();

    if optional::<bool>(sub_matches, PARAMETER_TRUSTED).unwrap_or(false) {
        debug!("Using trusted authentication for {}", username);
        client.logon_trusted(username).await?;
    } else {
        let password = match optional::<String>(sub_matches, PARAMETER_PASSWORD) {
            Some(password) => password,
            None => inquire::Password::new(&format!("Password for {}:", username))
                .without_confirmation()
                .prompt()?,
        };
        client.logon(username, &password).await?;
    }

    Ok(client)
}

/// Log off, reporting but not failing on an unsuccessful sign-off.
pub async fn logoff(client: BoClient) {
    match client.logoff().await {
        Ok(status) if status.is_success() => debug!("Logged off ({})", status),
        Ok(status) => warn!("Logoff returned {}", status),
        Err(e) => warn!("Logoff failed: {}", e),
    }
}

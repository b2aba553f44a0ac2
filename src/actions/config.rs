use clap::ArgMatches;
use tracing::{info, trace};

use crate::actions::print_output;
use crate::actions::session::effective_configuration;
use crate::configuration::Configuration;
use crate::error::CliError;

pub fn print_configuration_path() -> Result<(), CliError> {
    let path = Configuration::get_default_configuration_file_path()?;
    println!("{}", path.display());
    Ok(())
}

/// Show the configuration file merged with any command-line overrides.
pub fn print_configuration(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Showing the effective configuration...");
    let configuration = effective_configuration(sub_matches)?;
    print_output(sub_matches, &configuration)
}

pub fn initialize_configuration(sub_matches: &ArgMatches) -> Result<(), CliError> {
    let configuration = effective_configuration(sub_matches)?;
    let path = Configuration::get_default_configuration_file_path()?;
    configuration.save(&path)?;
    info!("Configuration written to {}", path.display());
    println!("{}", path.display());
    Ok(())
}

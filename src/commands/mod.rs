//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the clap crate.
//! Each resource has its own submodule; the shared parameters live in `params`.

use clap::Command;

pub mod config;
pub mod dataprovider;
pub mod document;
pub mod folder;
pub mod params;
pub mod sweep;
pub mod universe;

use params::{
    format_parameter, format_pretty_parameter, format_with_headers_parameter, host_parameter,
    insecure_parameter, password_parameter, port_parameter, protocol_parameter,
    trusted_parameter, username_parameter, verbose_parameter,
};

/// Create and configure all CLI commands and their arguments.
///
/// Connection, logon and output options are global so they can be given
/// before or after the subcommand.
pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_parameter())
        .arg(protocol_parameter())
        .arg(host_parameter())
        .arg(port_parameter())
        .arg(insecure_parameter())
        .arg(username_parameter())
        .arg(password_parameter())
        .arg(trusted_parameter())
        .arg(format_parameter())
        .arg(format_pretty_parameter())
        .arg(format_with_headers_parameter())
        .subcommand(folder::folder_command())
        .subcommand(document::document_command())
        .subcommand(dataprovider::data_provider_command())
        .subcommand(universe::universe_command())
        .subcommand(sweep::sweep_command())
        .subcommand(config::config_command())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from([
                "bocli", "folder", "list", "--root", "23", "--host", "bi", "--format", "csv",
            ])
            .unwrap();
        let (_, folder) = matches.subcommand().unwrap();
        let (_, list) = folder.subcommand().unwrap();
        assert_eq!(list.get_one::<String>(params::PARAMETER_HOST).unwrap(), "bi");
        assert_eq!(list.get_one::<String>(params::PARAMETER_FORMAT).unwrap(), "csv");
        assert_eq!(list.get_one::<String>(params::PARAMETER_ROOT).unwrap(), "23");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result =
            build_cli().try_get_matches_from(["bocli", "universe", "list", "--format", "tree"]);
        assert!(result.is_err());
    }
}

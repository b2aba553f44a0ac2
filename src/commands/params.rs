//! Shared command parameters for all CLI commands.
//!
//! This module defines common parameters that are used across multiple command modules.
//! It provides a centralized place to define parameter names and common argument configurations.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};

// Top level commands
pub const COMMAND_FOLDER: &str = "folder";
pub const COMMAND_DOCUMENT: &str = "document";
pub const COMMAND_DATA_PROVIDER: &str = "dataprovider";
pub const COMMAND_UNIVERSE: &str = "universe";
pub const COMMAND_SWEEP: &str = "sweep";
pub const COMMAND_CONFIG: &str = "config";

// Operations
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_GET: &str = "get";
pub const COMMAND_STATUS: &str = "status";
pub const COMMAND_DELETE: &str = "delete";
pub const COMMAND_SAVE: &str = "save";
pub const COMMAND_PURGE: &str = "purge";
pub const COMMAND_REPORTS: &str = "reports";
pub const COMMAND_CONNECTION: &str = "connection";
pub const COMMAND_PATH: &str = "path";
pub const COMMAND_SHOW: &str = "show";
pub const COMMAND_INIT: &str = "init";

// Connection and logon parameters
pub const PARAMETER_PROTOCOL: &str = "protocol";
pub const PARAMETER_HOST: &str = "host";
pub const PARAMETER_PORT: &str = "port";
pub const PARAMETER_INSECURE: &str = "insecure";
pub const PARAMETER_USERNAME: &str = "username";
pub const PARAMETER_PASSWORD: &str = "password";
pub const PARAMETER_TRUSTED: &str = "trusted";
pub const PARAMETER_MAX_DEPTH: &str = "max-depth";

// Output parameters
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_PRETTY: &str = "pretty";
pub const PARAMETER_HEADERS: &str = "headers";
pub const PARAMETER_VERBOSE: &str = "verbose";

// Resource parameters
pub const PARAMETER_ID: &str = "id";
pub const PARAMETER_ROOT: &str = "root";
pub const PARAMETER_FOLDER: &str = "folder";
pub const PARAMETER_DOCUMENT: &str = "document";
pub const PARAMETER_NAME: &str = "name";
pub const PARAMETER_RECURSIVE: &str = "recursive";
pub const PARAMETER_NO_SAVE: &str = "no-save";

pub const ENV_PASSWORD: &str = "BOCLI_PASSWORD";

/// Create the global format parameter.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .env("BOCLI_FORMAT")
        .default_value("json")
        .global(true)
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

/// This parameter flag is used across multiple commands for output formatting.
pub fn format_pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Format the output pretty")
}

/// This parameter flag is used across multiple commands for output formatting.
pub fn format_with_headers_parameter() -> Arg {
    Arg::new(PARAMETER_HEADERS)
        .long(PARAMETER_HEADERS)
        .action(ArgAction::SetTrue)
        .global(true)
        .env("BOCLI_HEADERS")
        .help("Format the output with headers")
}

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Enable verbose output for debugging")
}

pub fn protocol_parameter() -> Arg {
    Arg::new(PARAMETER_PROTOCOL)
        .long(PARAMETER_PROTOCOL)
        .num_args(1)
        .global(true)
        .value_parser(["http", "https"])
        .help("Protocol of the BI platform REST service (overrides the configuration)")
}

pub fn host_parameter() -> Arg {
    Arg::new(PARAMETER_HOST)
        .long(PARAMETER_HOST)
        .num_args(1)
        .global(true)
        .env("BOCLI_HOST")
        .help("Host of the BI platform REST service (overrides the configuration)")
}

pub fn port_parameter() -> Arg {
    Arg::new(PARAMETER_PORT)
        .long(PARAMETER_PORT)
        .num_args(1)
        .global(true)
        .value_parser(clap::value_parser!(u16))
        .help("Port of the BI platform REST service (overrides the configuration)")
}

pub fn insecure_parameter() -> Arg {
    Arg::new(PARAMETER_INSECURE)
        .long(PARAMETER_INSECURE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Do not verify the server's TLS certificate")
}

pub fn username_parameter() -> Arg {
    Arg::new(PARAMETER_USERNAME)
        .short('u')
        .long(PARAMETER_USERNAME)
        .num_args(1)
        .global(true)
        .env("BOCLI_USERNAME")
        .help("User name to log on with (overrides the configuration)")
}

pub fn password_parameter() -> Arg {
    Arg::new(PARAMETER_PASSWORD)
        .long(PARAMETER_PASSWORD)
        .num_args(1)
        .global(true)
        .env(ENV_PASSWORD)
        .hide_env_values(true)
        .help("Password; prompted for when missing")
}

pub fn trusted_parameter() -> Arg {
    Arg::new(PARAMETER_TRUSTED)
        .long(PARAMETER_TRUSTED)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Use trusted authentication (no password)")
}

pub fn max_depth_parameter() -> Arg {
    Arg::new(PARAMETER_MAX_DEPTH)
        .long(PARAMETER_MAX_DEPTH)
        .num_args(1)
        .value_parser(clap::value_parser!(usize))
        .help("Maximum folder depth to descend (overrides the configuration)")
}

/// An object id argument with the given name.
pub fn id_parameter(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .num_args(1)
        .required(true)
        .help(help)
}

pub fn recursive_parameter() -> Arg {
    Arg::new(PARAMETER_RECURSIVE)
        .short('r')
        .long(PARAMETER_RECURSIVE)
        .action(ArgAction::SetTrue)
        .help("Include all sub-folders")
}

pub fn no_save_parameter() -> Arg {
    Arg::new(PARAMETER_NO_SAVE)
        .long(PARAMETER_NO_SAVE)
        .action(ArgAction::SetTrue)
        .help("Do not save the document after purging")
}

pub fn name_parameter() -> Arg {
    Arg::new(PARAMETER_NAME)
        .long(PARAMETER_NAME)
        .num_args(1)
        .required(true)
        .help("Document name")
}

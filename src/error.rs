use reqwest::StatusCode;
use thiserror::Error;

use crate::{exit_codes::ExitCode, model::ObjectId};

/// Errors raised by the BusinessObjects REST client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Either logon flow was answered with something other than 200 OK
    #[error("Could not log on and set the logon token (HTTP {status}): {body}")]
    Authentication { status: StatusCode, body: String },
    /// The identifier could not be resolved by the server
    #[error("{0}")]
    NotFound(String),
    /// The universe reported a type other than `unx` or `unv`
    #[error("Invalid universe type: {0:?}")]
    UnsupportedUniverseType(String),
    /// Any other non-success response
    #[error("Unexpected response from server (HTTP {status}): {body}")]
    Api { status: StatusCode, body: String },
    #[error("Folder {folder_id} has sub-folders deeper than the maximum depth of {max_depth}")]
    DepthExceeded { folder_id: ObjectId, max_depth: usize },
    /// An identifier that cannot be safely placed into a CMS query
    #[error("Invalid identifier for a CMS query: {0:?}")]
    InvalidIdentifier(String),
    /// A configured or issued value cannot be sent as an HTTP header
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
    /// The response parsed as JSON but did not have the expected shape
    #[error("Unexpected response body: {0}")]
    UnexpectedResponse(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),
    /// Error related to configuration loading or management
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),
    /// Error related to data formatting
    #[error("Formatting error: {0}")]
    FormattingError(#[from] crate::format::FormattingError),
    /// Error when a required command-line argument is missing
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
    /// Error reported by the platform client
    #[error("{0}")]
    ClientError(#[from] ClientError),
    /// An operation that reports failures as a sentinel returned one
    #[error("{0}")]
    OperationFailed(String),
    /// Error when reading the password prompt
    #[error("Failed to read the password: {0}")]
    PromptError(#[from] inquire::InquireError),
}

impl CliError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => ExitCode::UsageError,
            CliError::MissingRequiredArgument(_) => ExitCode::UsageError,
            CliError::ConfigurationError(_) => ExitCode::ConfigError,
            CliError::FormattingError(_) => ExitCode::DataError,
            CliError::PromptError(_) => ExitCode::UsageError,
            CliError::OperationFailed(_) => ExitCode::ApiError,
            CliError::ClientError(e) => match e {
                ClientError::Authentication { .. } => ExitCode::AuthError,
                ClientError::NotFound(_) => ExitCode::NotFound,
                ClientError::InvalidIdentifier(_) | ClientError::InvalidHeader(_) => {
                    ExitCode::UsageError
                }
                ClientError::UnsupportedUniverseType(_) => ExitCode::DataError,
                ClientError::UnexpectedResponse(_) | ClientError::Json(_) => ExitCode::DataError,
                ClientError::Api { .. } | ClientError::DepthExceeded { .. } => ExitCode::ApiError,
                ClientError::Http(_) => ExitCode::NetworkError,
            },
        }
    }
}

//! Custom exit codes for the bocli application
//!
//! This module defines specific exit codes for different error conditions
//! to make scripting and automation easier.

/// Custom exit codes for bocli
///
/// These codes follow the BSD sysexits.h conventions where possible:
/// - 0: Success
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Custom application-specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0) - Command completed successfully
    Success = exitcode::OK as isize,

    /// Command line usage error (64) - User input error
    UsageError = exitcode::USAGE as isize,

    /// Data format error (65) - The server sent data we could not interpret
    DataError = exitcode::DATAERR as isize,

    /// Addressee unknown (67) - Folder, document or universe not found
    NotFound = exitcode::NOUSER as isize,

    /// Internal software error (70) - Unexpected application error
    SoftwareError = exitcode::SOFTWARE as isize,

    /// Configuration error (78) - Application configuration issue
    ConfigError = exitcode::CONFIG as isize,

    /// Authentication error (100) - Logon failed
    AuthError = 100,

    /// Network error (101) - Connection or communication issues
    NetworkError = 101,

    /// API error (102) - Remote API returned an error
    ApiError = 102,
}

impl ExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Get descriptive message for the exit code
    pub fn message(&self) -> &'static str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::UsageError => "Command line usage error",
            ExitCode::DataError => "Data format error",
            ExitCode::NotFound => "Resource not found",
            ExitCode::SoftwareError => "Internal software error",
            ExitCode::ConfigError => "Configuration error",
            ExitCode::AuthError => "Authentication error",
            ExitCode::NetworkError => "Network communication error",
            ExitCode::ApiError => "Remote API error",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.code()
    }
}

//! Comprehensive error types for maker operations.
//!
//! This module defines the top-level error type used by the CLI and
//! manifest loading, wrapping the library's [`maker::Error`](crate::maker::Error).

use thiserror::Error;

/// Result type alias for CLI-level operations
pub type Result<T> = std::result::Result<T, MakerError>;

/// Main error type for all maker operations
#[derive(Error, Debug)]
pub enum MakerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config loading or resolution errors
    #[error("Maker error: {0}")]
    Maker(#[from] crate::maker::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl MakerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::maker::Error as E;

        match self {
            MakerError::Maker(E::HookFailed(_) | E::HookTimeout(_)) => vec![
                "Check that the appBuilderConfig file or command works on its own".to_string(),
                "Run with RUST_LOG=debug to see which hook source was used".to_string(),
            ],
            MakerError::Maker(E::HookContract { .. }) => vec![
                "The appBuilderConfig source must produce a JSON object at the top level"
                    .to_string(),
            ],
            MakerError::Maker(E::InvalidUpdaterUrl { .. }) => vec![
                "updater.url must be an absolute http:// or https:// URL".to_string(),
            ],
            MakerError::Maker(E::Config { .. }) => vec![
                "Config keys are camelCase (e.g. updaterCacheDirName, certificateFile)"
                    .to_string(),
                "codesign.appDirectory is supplied by the maker and may not be set".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

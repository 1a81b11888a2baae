//! Error types for maker configuration loading and resolution.

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Result type alias for maker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, validating or resolving a maker config.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed.
    #[error("{context} ({}): {source}", path.display())]
    Fs {
        /// What was being attempted
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML (de)serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_bw::Error),

    /// Config document has an invalid shape.
    #[error("invalid maker config in {}: {reason}", path.display())]
    Config {
        /// File the config was read from
        path: PathBuf,
        /// Why it was rejected
        reason: String,
    },

    /// The app builder config hook failed.
    #[error("getAppBuilderConfig failed: {0}")]
    HookFailed(#[source] anyhow::Error),

    /// The app builder config hook resolved to something that is not a mapping.
    #[error("getAppBuilderConfig must resolve to an object, got {found}")]
    HookContract {
        /// JSON type name of the value actually produced
        found: &'static str,
    },

    /// The app builder config hook did not finish in time.
    #[error("getAppBuilderConfig timed out after {0:?}")]
    HookTimeout(Duration),

    /// An external command could not be spawned.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Program name
        command: String,
        /// Spawn error
        error: std::io::Error,
    },

    /// Updater feed URL is not an absolute http(s) URL.
    #[error("invalid updater url `{url}`: {reason}")]
    InvalidUpdaterUrl {
        /// URL as configured
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Unsupported or unknown target architecture.
    #[error("architecture error: {0}")]
    ArchError(String),

    /// Catch-all with a message.
    #[error("{0}")]
    GenericError(String),
}

/// Attach filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wrap an IO error with what was being done and the path involved.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Prefix an error with a human readable context message.
pub trait Context<T> {
    /// Replace the error with a [`Error::GenericError`] carrying `msg: cause`.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

//! NSIS maker configuration library
//!
//! This library defines the configuration surface of an NSIS (Windows
//! installer) maker and resolves it into the documents external tools read:
//! - codesigning options for the Windows signing utility
//! - the app builder config, including an async `getAppBuilderConfig` hook
//! - the updater runtime's `app-update.yml`
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod maker;
pub mod metadata;

// Re-export commonly used types
pub use error::{CliError, MakerError, Result};
pub use maker::{AppBuilderConfigHook, CodesignOptions, MakerNsisConfig, UpdaterConfig};

//! NSIS installer presentation settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// NSIS installer mode (installation scope).
///
/// Determines whether the installer installs for the current user only,
/// all users (requires admin), or lets the user choose.
///
/// # Configuration
///
/// ```toml
/// [nsis]
/// installMode = "perMachine"  # or "currentUser" or "both"
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NSISInstallerMode {
    /// Per-user installation (no admin rights required).
    ///
    /// Installs to `%LOCALAPPDATA%`.
    #[default]
    CurrentUser,

    /// Per-machine installation (requires admin rights).
    ///
    /// Installs to `%PROGRAMFILES%`.
    PerMachine,

    /// Let user choose during installation.
    Both,
}

/// NSIS compression algorithm.
///
/// Controls the compression method used for the NSIS installer executable.
///
/// | Algorithm | Speed | Size | Notes |
/// |-----------|-------|------|-------|
/// | None | Fastest | Largest | Development only |
/// | Zlib | Fast | Medium | Good balance |
/// | Bzip2 | Medium | Small | Better compression |
/// | LZMA | Slowest | Smallest | Default |
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NsisCompression {
    /// No compression - fastest, largest size.
    None,

    /// zlib compression.
    Zlib,

    /// bzip2 compression - smaller than zlib.
    Bzip2,

    /// LZMA compression - smallest size, slowest.
    #[default]
    Lzma,
}

/// Default installer file name pattern, expanded by the app builder.
pub const DEFAULT_ARTIFACT_NAME: &str = "${productName} Setup ${version}.${ext}";

/// NSIS installer (.exe) configuration.
///
/// These settings seed the `nsis` section of the app builder config. Any
/// value returned by the `getAppBuilderConfig` hook takes precedence.
///
/// # Configuration
///
/// ```toml
/// [nsis]
/// installMode = "perMachine"
/// compression = "lzma"
/// languages = ["en_US", "de_DE"]
/// ```
///
/// # See Also
///
/// - [`NSISInstallerMode`] - Installation scope
/// - [`NsisCompression`] - Compression algorithms
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NsisSettings {
    /// Path to custom NSIS script (.nsi file).
    ///
    /// Default: None (app builder's built-in script)
    #[serde(default)]
    pub script: Option<PathBuf>,

    /// Path to header image (150×57 pixels).
    ///
    /// Default: None
    #[serde(default)]
    pub header_image: Option<PathBuf>,

    /// Path to sidebar image (164×314 pixels).
    ///
    /// Default: None
    #[serde(default)]
    pub sidebar_image: Option<PathBuf>,

    /// Path to installer icon (.ico file).
    ///
    /// Default: None (uses application icon)
    #[serde(default)]
    pub installer_icon: Option<PathBuf>,

    /// Installation mode (per-user, per-machine, or both).
    ///
    /// Default: [`NSISInstallerMode::CurrentUser`]
    #[serde(default)]
    pub install_mode: NSISInstallerMode,

    /// Supported installer languages.
    ///
    /// Default: None (uses English)
    #[serde(default)]
    pub languages: Option<Vec<String>>,

    /// Compression algorithm for installer.
    ///
    /// Default: None (uses [`NsisCompression::Lzma`])
    #[serde(default)]
    pub compression: Option<NsisCompression>,

    /// Installer file name pattern.
    ///
    /// Default: None (uses [`DEFAULT_ARTIFACT_NAME`])
    #[serde(default)]
    pub artifact_name: Option<String>,
}

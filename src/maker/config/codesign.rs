//! Codesigning parameters handed to the Windows signing utility.
//!
//! [`SignOptions`] mirrors the option record of the external signing tool.
//! [`CodesignOptions`] is that record without `appDirectory`: the maker fills
//! the app directory in itself, so user configuration may not set it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the certificate path.
pub const ENV_CERTIFICATE_FILE: &str = "WINDOWS_CERTIFICATE_FILE";
/// Environment variable holding the certificate password.
pub const ENV_CERTIFICATE_PASSWORD: &str = "WINDOWS_CERTIFICATE_PASSWORD";
/// Environment variable holding the timestamp server URL.
pub const ENV_TIMESTAMP_SERVER: &str = "WINDOWS_TIMESTAMP_SERVER";
/// Environment variable holding extra signtool parameters.
pub const ENV_SIGN_WITH_PARAMS: &str = "WINDOWS_SIGN_WITH_PARAMS";

/// Digest algorithm used for a signature pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256 (default for modern Windows)
    Sha256,
    /// SHA-1 (legacy dual-signing)
    Sha1,
}

/// Extra parameters passed verbatim to signtool.
///
/// Accepts either a single string or a list of strings.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SignParams {
    /// Single parameter string, e.g. `"/a /tr http://ts"`
    One(String),
    /// Pre-split parameter list
    Many(Vec<String>),
}

/// Codesigning options as written by the user.
///
/// Every field of [`SignOptions`] except `appDirectory`. Unknown keys are
/// rejected, which includes `appDirectory` itself.
///
/// # Configuration
///
/// ```toml
/// [codesign]
/// certificateFile = "cert.pfx"
/// certificatePassword = "hunter2"
/// timestampServer = "http://timestamp.digicert.com"
/// hashes = ["sha256"]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CodesignOptions {
    /// Path to the certificate (.pfx / .p12).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_file: Option<PathBuf>,

    /// Password for the certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_password: Option<String>,

    /// Custom signtool.exe location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_tool_path: Option<PathBuf>,

    /// Extra signtool parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_with_params: Option<SignParams>,

    /// RFC 3161 timestamp server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_server: Option<String>,

    /// Description embedded in the signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Website embedded in the signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Let signtool pick the best certificate from the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatically_select_certificate: Option<bool>,

    /// Verbose signing output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Explicit list of files to sign instead of scanning the app directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PathBuf>>,

    /// Digest algorithms, one signature pass each.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashes: Option<Vec<HashAlgorithm>>,

    /// Also sign `.js` files.
    #[serde(
        default,
        rename = "signJavaScript",
        skip_serializing_if = "Option::is_none"
    )]
    pub sign_javascript: Option<bool>,

    /// Module implementing a custom signing hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_module_path: Option<PathBuf>,
}

impl CodesignOptions {
    /// Fill unset fields from the `WINDOWS_*` environment variables.
    pub fn apply_env_fallbacks(&mut self) {
        self.apply_fallbacks_from(|key| std::env::var(key).ok());
    }

    /// Fill unset fields using `lookup` as the variable source.
    ///
    /// Explicitly configured values are never overwritten. Empty values are
    /// treated as unset.
    pub fn apply_fallbacks_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if self.certificate_file.is_none() {
            self.certificate_file = lookup(ENV_CERTIFICATE_FILE).map(PathBuf::from);
        }
        if self.certificate_password.is_none() {
            self.certificate_password = lookup(ENV_CERTIFICATE_PASSWORD);
        }
        if self.timestamp_server.is_none() {
            self.timestamp_server = lookup(ENV_TIMESTAMP_SERVER);
        }
        if self.sign_with_params.is_none() {
            self.sign_with_params = lookup(ENV_SIGN_WITH_PARAMS).map(SignParams::One);
        }
    }

    /// Whether anything tells the signing tool which certificate to use.
    pub fn has_certificate_source(&self) -> bool {
        self.certificate_file.is_some()
            || self.sign_with_params.is_some()
            || self.hook_module_path.is_some()
            || self.automatically_select_certificate == Some(true)
    }

    /// Complete the options with the app directory supplied by the maker.
    pub fn with_app_directory(self, app_directory: impl AsRef<Path>) -> SignOptions {
        SignOptions {
            app_directory: app_directory.as_ref().to_path_buf(),
            options: self,
        }
    }
}

/// Full option record accepted by the Windows signing utility.
///
/// Serializes to the flat camelCase JSON shape the tool reads.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOptions {
    /// Packaged application directory whose binaries get signed.
    pub app_directory: PathBuf,

    /// Every other signing option.
    #[serde(flatten)]
    pub options: CodesignOptions,
}

//! Top-level maker configuration.

use super::{CodesignOptions, NsisSettings, UpdaterConfig};
use crate::maker::{
    error::{Error, ErrorExt, Result},
    hook::{AppBuilderConfigHook, parse_document},
};
use path_absolutize::Absolutize;
use serde::Deserialize;
use std::path::Path;

/// Configuration passed by the caller into the NSIS maker.
///
/// Every field is optional; an empty document is a valid configuration.
/// No relationship between fields is enforced: an updater channel is
/// accepted without codesigning, and so on.
///
/// # Configuration
///
/// ```toml
/// [codesign]
/// certificateFile = "cert.pfx"
///
/// [updater]
/// url = "https://example.com/updates"
/// channel = "beta"
///
/// [appBuilderConfig]
/// file = "electron-builder.yml"
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MakerNsisConfig {
    /// Codesigning parameters (everything but the app directory).
    #[serde(default)]
    pub codesign: Option<CodesignOptions>,

    /// Auto-updater settings.
    #[serde(default)]
    pub updater: Option<UpdaterConfig>,

    /// Installer presentation defaults.
    #[serde(default)]
    pub nsis: NsisSettings,

    /// Hook producing extra app builder configuration.
    #[serde(default, rename = "appBuilderConfig", alias = "getAppBuilderConfig")]
    pub get_app_builder_config: Option<AppBuilderConfigHook>,
}

impl MakerNsisConfig {
    /// Read a standalone config file (`.toml`, `.json`, `.yml`/`.yaml`).
    ///
    /// Relative paths inside declarative hooks are resolved against the
    /// file's directory.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .fs_context("reading maker config", path)?;
        let value = parse_document(path, &content)?;
        let mut config = Self::from_value(value).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if let Some(base) = path.parent() {
            config.rebase(base)?;
        }

        log::debug!("Loaded maker config from {}", path.display());
        Ok(config)
    }

    /// Build from an already parsed document.
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Resolve relative hook paths against `base`.
    pub fn rebase(&mut self, base: &Path) -> Result<()> {
        if let Some(AppBuilderConfigHook::Source(source)) = &mut self.get_app_builder_config {
            let base = base
                .absolutize()
                .fs_context("resolving config directory", base)?;
            source.rebase(&base)?;
        }
        Ok(())
    }

    /// Attach a code-supplied hook, replacing any declared one.
    pub fn with_app_builder_config(mut self, hook: AppBuilderConfigHook) -> Self {
        self.get_app_builder_config = Some(hook);
        self
    }
}

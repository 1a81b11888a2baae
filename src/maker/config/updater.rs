//! Auto-updater settings and the `app-update.yml` document derived from them.

use crate::maker::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// File name the updater runtime reads from the app's resources directory.
pub const APP_UPDATE_FILE: &str = "app-update.yml";

/// Auto-updater configuration.
///
/// `url` is mandatory once an `updater` block is present; everything else
/// is optional.
///
/// # Configuration
///
/// ```toml
/// [updater]
/// url = "https://example.com/updates"
/// channel = "beta"
/// publisherName = "Example Inc."
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdaterConfig {
    /// Distribution endpoint for update artifacts.
    pub url: String,

    /// Release channel identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Local cache directory name for downloaded updates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updater_cache_dir_name: Option<String>,

    /// Publisher display name, checked against the update's signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
}

impl UpdaterConfig {
    /// Updater pointing at `url` with every optional field unset.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            channel: None,
            updater_cache_dir_name: None,
            publisher_name: None,
        }
    }

    /// Parse the feed URL, requiring an absolute http(s) URL.
    pub fn feed_url(&self) -> Result<url::Url> {
        let invalid = |reason: String| Error::InvalidUpdaterUrl {
            url: self.url.clone(),
            reason,
        };

        let parsed = url::Url::parse(&self.url).map_err(|e| invalid(e.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(invalid(format!("unsupported scheme `{other}`"))),
        }
    }

    /// Build the `app-update.yml` document for this updater.
    pub fn app_update_config(&self) -> Result<AppUpdateConfig> {
        let url = self.feed_url()?;
        Ok(AppUpdateConfig {
            provider: "generic".to_string(),
            url: url.to_string(),
            channel: self.channel.clone(),
            updater_cache_dir_name: self.updater_cache_dir_name.clone(),
            publisher_name: self.publisher_name.clone().map(|name| vec![name]),
        })
    }
}

/// Contents of `app-update.yml`, read by the updater runtime at startup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUpdateConfig {
    /// Update provider kind; always `generic` for a plain URL feed.
    pub provider: String,

    /// Normalised feed URL.
    pub url: String,

    /// Release channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Cache directory name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updater_cache_dir_name: Option<String>,

    /// Accepted publisher names for signature verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<Vec<String>>,
}

impl AppUpdateConfig {
    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_bw::to_string(self)?)
    }
}

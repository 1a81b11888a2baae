//! Maker config and package metadata discovery.
//!
//! The maker config can live in a standalone file or in the
//! `[package.metadata.maker-nsis]` table of a `Cargo.toml`.

use crate::error::{CliError, MakerError, Result};
use crate::maker::{MakerNsisConfig, PackageSettings};
use std::path::Path;

/// Table under `[package.metadata]` holding the maker config.
pub const METADATA_TABLE: &str = "maker-nsis";

/// Package metadata extracted from Cargo.toml
pub struct PackageMetadata {
    /// Package name from Cargo.toml
    pub name: String,

    /// Package description from Cargo.toml
    pub description: String,

    /// Package version from Cargo.toml (e.g., "0.1.0")
    pub version: String,

    /// List of package authors from Cargo.toml
    pub authors: Vec<String>,

    /// Homepage URL if specified in Cargo.toml
    pub homepage: Option<String>,
}

impl From<PackageMetadata> for PackageSettings {
    fn from(metadata: PackageMetadata) -> Self {
        PackageSettings {
            product_name: metadata.name,
            version: metadata.version,
            description: metadata.description,
            homepage: metadata.homepage,
            authors: (!metadata.authors.is_empty()).then_some(metadata.authors),
        }
    }
}

/// Maker config plus whatever package metadata came with it.
pub struct LoadedConfig {
    /// Package metadata, present when loaded from a Cargo.toml
    pub metadata: Option<PackageMetadata>,

    /// The maker config
    pub config: MakerNsisConfig,
}

/// Load a maker config from `path`.
///
/// `Cargo.toml` files are read through [`load_manifest`]; anything else is
/// treated as a standalone `.toml`/`.json`/`.yml` config file.
pub async fn load_config(path: &Path) -> Result<LoadedConfig> {
    if path.file_name().is_some_and(|name| name == "Cargo.toml") {
        return load_manifest(path);
    }

    let config = MakerNsisConfig::from_file(path).await?;
    Ok(LoadedConfig {
        metadata: None,
        config,
    })
}

/// Load package metadata and maker config from Cargo.toml (single read + parse)
///
/// A missing `[package.metadata.maker-nsis]` table yields the default
/// (empty) config.
pub fn load_manifest(cargo_toml_path: &Path) -> Result<LoadedConfig> {
    let manifest = std::fs::read_to_string(cargo_toml_path).map_err(|e| {
        MakerError::Cli(CliError::ExecutionFailed {
            command: "read_cargo_toml".to_string(),
            reason: format!("Failed to read {}: {}", cargo_toml_path.display(), e),
        })
    })?;

    let toml_value: toml::Value = toml::from_str(&manifest)?;

    let package = toml_value.get("package").ok_or_else(|| {
        MakerError::Cli(CliError::InvalidArguments {
            reason: "No [package] section in Cargo.toml".to_string(),
        })
    })?;

    let metadata = PackageMetadata {
        name: package
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                MakerError::Cli(CliError::InvalidArguments {
                    reason: "Missing 'name' in [package]".to_string(),
                })
            })?
            .to_string(),

        description: package
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),

        // Workspace-inherited versions (`version.workspace = true`) are not strings
        version: package
            .get("version")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),

        authors: package
            .get("authors")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default(),

        homepage: package
            .get("homepage")
            .and_then(|v| v.as_str())
            .map(String::from),
    };

    let mut config = match package
        .get("metadata")
        .and_then(|m| m.get(METADATA_TABLE))
    {
        Some(table) => {
            let value = serde_json::to_value(table)?;
            MakerNsisConfig::from_value(value).map_err(|e| crate::maker::Error::Config {
                path: cargo_toml_path.to_path_buf(),
                reason: e.to_string(),
            })?
        }
        None => {
            log::debug!(
                "No [package.metadata.{}] in {}, using defaults",
                METADATA_TABLE,
                cargo_toml_path.display()
            );
            MakerNsisConfig::default()
        }
    };

    if let Some(base) = cargo_toml_path.parent() {
        config.rebase(base)?;
    }

    Ok(LoadedConfig {
        metadata: Some(metadata),
        config,
    })
}

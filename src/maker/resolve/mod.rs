//! Maker config resolution.
//!
//! Turns a [`MakerNsisConfig`] plus a [`MakeContext`] into the documents the
//! external tools consume: signing options for the Windows signing utility,
//! the app builder config, and the updater's `app-update.yml`.
//!
//! # Process
//!
//! 1. Complete codesign options with env fallbacks and the app directory
//! 2. Build the `app-update.yml` document, if an updater is configured
//! 3. Generate the default app builder config
//! 4. Await the `getAppBuilderConfig` hook, if any, and merge its result

mod app_builder;
mod utils;

pub use app_builder::default_config;
pub use utils::{deep_merge, format_version_for_nsis};

use crate::maker::{
    config::{APP_UPDATE_FILE, AppUpdateConfig, MakerNsisConfig, SignOptions},
    context::MakeContext,
    error::{ErrorExt, Result},
};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// File name for the serialized signing options.
pub const SIGN_OPTIONS_FILE: &str = "sign-options.json";
/// File name for the serialized app builder config.
pub const APP_BUILDER_FILE: &str = "app-builder.json";

/// Fully resolved configuration for one make run.
#[derive(Clone, Debug)]
pub struct ResolvedMake {
    /// Options for the signing utility, when codesigning is configured.
    pub sign_options: Option<SignOptions>,

    /// Config passed to the app builder.
    pub app_builder_config: Map<String, Value>,

    /// Updater runtime config, when an updater is configured.
    pub app_update: Option<AppUpdateConfig>,
}

/// Resolve `config` for the invocation described by `ctx`.
///
/// A failing or contract-violating hook aborts resolution.
pub async fn resolve(config: &MakerNsisConfig, ctx: &MakeContext) -> Result<ResolvedMake> {
    log::info!(
        "Resolving NSIS maker config for {} ({})",
        if ctx.product_name().is_empty() {
            "<unnamed>"
        } else {
            ctx.product_name()
        },
        ctx.target_arch()
    );

    let sign_options = config.codesign.clone().map(|mut codesign| {
        codesign.apply_env_fallbacks();
        if !codesign.has_certificate_source() {
            log::warn!(
                "codesign is configured but no certificate source is set; signing will likely fail"
            );
        }
        codesign.with_app_directory(ctx.app_directory())
    });

    // Everything that can be rejected is checked before the hook runs.
    let app_update = config
        .updater
        .as_ref()
        .map(|updater| updater.app_update_config())
        .transpose()?;

    let mut app_builder_config = default_config(config, ctx)?;

    if let Some(hook) = &config.get_app_builder_config {
        log::debug!("Awaiting getAppBuilderConfig hook: {:?}", hook);
        let overlay = hook.resolve().await?;
        log::debug!("Hook returned {} top-level keys", overlay.len());
        deep_merge(&mut app_builder_config, overlay);
    }

    Ok(ResolvedMake {
        sign_options,
        app_builder_config,
        app_update,
    })
}

impl ResolvedMake {
    /// Write the resolved documents into `dir`, creating it if needed.
    ///
    /// Only documents that exist are written. Returns the written paths.
    pub async fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        tokio::fs::create_dir_all(dir)
            .await
            .fs_context("creating output directory", dir)?;

        let mut written = Vec::new();

        if let Some(sign_options) = &self.sign_options {
            let path = dir.join(SIGN_OPTIONS_FILE);
            utils::write_json(&path, sign_options).await?;
            written.push(path);
        }

        let path = dir.join(APP_BUILDER_FILE);
        utils::write_json(&path, &self.app_builder_config).await?;
        written.push(path);

        if let Some(app_update) = &self.app_update {
            let path = dir.join(APP_UPDATE_FILE);
            tokio::fs::write(&path, app_update.to_yaml()?)
                .await
                .fs_context("writing app-update.yml", &path)?;
            written.push(path);
        }

        for path in &written {
            log::info!("✓ Wrote {}", path.display());
        }

        Ok(written)
    }
}

//! Default app builder config generation.
//!
//! Builds the baseline document the hook result is merged over: output
//! directory, NSIS target for the requested architecture, installer
//! presentation, Windows file version, package metadata and the generic
//! publish provider.

use super::utils;
use crate::maker::{
    config::{DEFAULT_ARTIFACT_NAME, MakerNsisConfig},
    context::MakeContext,
    error::Result,
};
use serde_json::{Map, Value, json};

/// Generate the default app builder config for one make run.
///
/// # Arguments
/// - `config` - Maker configuration (NSIS settings and updater)
/// - `ctx` - Invocation context (architecture, output dir, version)
pub fn default_config(config: &MakerNsisConfig, ctx: &MakeContext) -> Result<Map<String, Value>> {
    let arch = ctx.target_arch().nsis_arch()?;
    let nsis_settings = &config.nsis;

    let mut doc = Map::new();

    doc.insert(
        "directories".into(),
        json!({ "output": ctx.output_directory().display().to_string() }),
    );
    let mut win = Map::new();
    win.insert(
        "target".into(),
        json!([{ "target": "nsis", "arch": [arch] }]),
    );

    if !ctx.product_name().is_empty() {
        doc.insert("productName".into(), json!(ctx.product_name()));
    }

    // Windows file version needs 4 numeric parts; skip rather than fail on odd versions
    if !ctx.version_string().is_empty() {
        match utils::format_version_for_nsis(ctx.version_string()) {
            Ok(build_version) => {
                doc.insert("buildVersion".into(), json!(build_version));
            }
            Err(e) => log::warn!("Not setting buildVersion: {}", e),
        }
    }

    doc.insert(
        "compression".into(),
        json!(utils::map_compression(nsis_settings.compression)),
    );

    let (one_click, per_machine) = utils::map_install_mode(nsis_settings.install_mode);
    let mut nsis = Map::new();
    nsis.insert("oneClick".into(), json!(one_click));
    nsis.insert("perMachine".into(), json!(per_machine));
    if !one_click {
        nsis.insert("allowToChangeInstallationDirectory".into(), json!(true));
    }
    nsis.insert(
        "artifactName".into(),
        json!(
            nsis_settings
                .artifact_name
                .as_deref()
                .unwrap_or(DEFAULT_ARTIFACT_NAME)
        ),
    );

    if let Some(languages) = &nsis_settings.languages {
        nsis.insert("installerLanguages".into(), json!(languages));
    }
    if let Some(icon) = &nsis_settings.installer_icon {
        nsis.insert("installerIcon".into(), json!(icon.display().to_string()));
    }
    if let Some(header) = &nsis_settings.header_image {
        nsis.insert("installerHeader".into(), json!(header.display().to_string()));
    }
    if let Some(sidebar) = &nsis_settings.sidebar_image {
        nsis.insert("installerSidebar".into(), json!(sidebar.display().to_string()));
    }
    if let Some(script) = &nsis_settings.script {
        nsis.insert("script".into(), json!(script.display().to_string()));
    }
    doc.insert("nsis".into(), Value::Object(nsis));

    let package = ctx.package();
    let mut extra = Map::new();
    if !package.description.is_empty() {
        extra.insert("description".into(), json!(package.description));
    }
    if let Some(homepage) = &package.homepage {
        extra.insert("homepage".into(), json!(homepage));
    }
    if let Some(author) = package.authors.as_ref().and_then(|a| a.first()) {
        extra.insert("author".into(), json!(author));
    }
    if !extra.is_empty() {
        doc.insert("extraMetadata".into(), Value::Object(extra));
    }

    if let Some(updater) = &config.updater {
        let mut publish = Map::new();
        publish.insert("provider".into(), json!("generic"));
        publish.insert("url".into(), json!(updater.feed_url()?.to_string()));
        if let Some(channel) = &updater.channel {
            publish.insert("channel".into(), json!(channel));
        }
        if let Some(publisher) = &updater.publisher_name {
            win.insert("publisherName".into(), json!([publisher]));
        }
        doc.insert("publish".into(), json!([publish]));
    }
    doc.insert("win".into(), Value::Object(win));

    Ok(doc)
}

//! Resolution utility functions.
//!
//! Helpers for mapping NSIS settings onto app builder values, version
//! formatting, config merging and file output.

use crate::maker::{
    config::{NSISInstallerMode, NsisCompression},
    error::{Error, ErrorExt, Result},
};
use serde_json::{Map, Value};
use std::path::Path;

/// Map compression setting to the app builder compression level.
///
/// Defaults to LZMA (`maximum`) if no compression is specified.
pub fn map_compression(compression: Option<NsisCompression>) -> &'static str {
    match compression.unwrap_or_default() {
        NsisCompression::None => "store",
        NsisCompression::Zlib | NsisCompression::Bzip2 => "normal",
        NsisCompression::Lzma => "maximum",
    }
}

/// Map install mode to the app builder `(oneClick, perMachine)` pair.
pub fn map_install_mode(mode: NSISInstallerMode) -> (bool, bool) {
    match mode {
        NSISInstallerMode::CurrentUser => (true, false),
        NSISInstallerMode::PerMachine => (true, true),
        // Assisted installer with per-user default lets the user pick the scope.
        NSISInstallerMode::Both => (false, false),
    }
}

/// Format version string for the Windows file version resource.
///
/// Windows requires exactly 4 numeric parts (major.minor.patch.build).
/// Semver pre-release and build metadata are dropped:
/// - "1" -> "1.0.0.0"
/// - "1.2" -> "1.2.0.0"
/// - "1.2.3-beta.1" -> "1.2.3.0"
/// - "1.2.3.4" -> "1.2.3.4"
/// - "1.2.3.4.5" -> "1.2.3.4" (truncates to first 4)
pub fn format_version_for_nsis(version: &str) -> Result<String> {
    let unrepresentable = || {
        Error::GenericError(format!(
            "version `{version}` cannot be expressed as a 4-part Windows version"
        ))
    };

    if let Ok(v) = semver::Version::parse(version) {
        // each part of a Windows file version is a 16-bit word
        let max = u64::from(u16::MAX);
        if v.major > max || v.minor > max || v.patch > max {
            return Err(unrepresentable());
        }
        return Ok(format!("{}.{}.{}.0", v.major, v.minor, v.patch));
    }

    let parts: Vec<&str> = version.split('.').collect();
    if parts.iter().any(|p| p.is_empty() || p.parse::<u16>().is_err()) {
        return Err(unrepresentable());
    }

    match parts.len() {
        1 => Ok(format!("{}.0.0.0", parts[0])),
        2 => Ok(format!("{}.{}.0.0", parts[0], parts[1])),
        3 => Ok(format!("{}.{}.{}.0", parts[0], parts[1], parts[2])),
        _ => Ok(format!(
            "{}.{}.{}.{}",
            parts[0], parts[1], parts[2], parts[3]
        )),
    }
}

/// Recursively merge `overlay` into `base`.
///
/// Objects merge key by key; any other overlay value replaces the base value.
pub fn deep_merge(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match value {
            Value::Object(incoming) => match base.get_mut(&key) {
                Some(Value::Object(existing)) => deep_merge(existing, incoming),
                _ => {
                    base.insert(key, Value::Object(incoming));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}

/// Write pretty-printed JSON to `path`.
pub async fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    tokio::fs::write(path, content)
        .await
        .fs_context("writing JSON document", path)
}

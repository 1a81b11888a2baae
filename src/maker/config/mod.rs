//! Configuration types for the NSIS maker.
//!
//! This module defines the shape of the maker configuration: codesigning
//! parameters, auto-updater settings, installer presentation settings and
//! the hook producing the downstream app builder config.

mod arch;
mod codesign;
mod maker;
mod nsis;
mod updater;

pub use arch::Arch;
pub use codesign::{
    CodesignOptions, ENV_CERTIFICATE_FILE, ENV_CERTIFICATE_PASSWORD, ENV_SIGN_WITH_PARAMS,
    ENV_TIMESTAMP_SERVER, HashAlgorithm, SignOptions, SignParams,
};
pub use maker::MakerNsisConfig;
pub use nsis::{DEFAULT_ARTIFACT_NAME, NSISInstallerMode, NsisCompression, NsisSettings};
pub use updater::{APP_UPDATE_FILE, AppUpdateConfig, UpdaterConfig};

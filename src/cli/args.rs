//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap,
//! with validation of argument combinations.

use crate::maker::Arch;
use clap::Parser;
use std::path::PathBuf;

/// NSIS maker config resolver
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_maker_nsis",
    version,
    about = "Resolve NSIS maker configuration for Windows installer builds",
    long_about = "Loads an NSIS maker config (codesigning, updater, app builder hook), resolves it
for one packaged app directory and writes the documents the external tools read:

  sign-options.json   options for the Windows signing utility
  app-builder.json    config for the app builder (defaults merged with the hook result)
  app-update.yml      updater runtime config (only with an [updater] block)

Usage:
  kodegen_maker_nsis --config maker.toml --app-dir out/MyApp-win32-x64
  kodegen_maker_nsis --config Cargo.toml --app-dir out/app --arch arm64 --make-dir out/make
  kodegen_maker_nsis --config maker.yml --check"
)]
pub struct Args {
    /// Maker config file (.toml, .json, .yml) or a Cargo.toml with [package.metadata.maker-nsis]
    #[arg(short, long, value_name = "PATH", default_value = "Cargo.toml")]
    pub config: PathBuf,

    /// Packaged application directory (supplied to the signing utility as appDirectory)
    #[arg(short, long, value_name = "DIR")]
    pub app_dir: Option<PathBuf>,

    /// Root directory for make outputs; documents go to <make-dir>/nsis/<arch>
    #[arg(short, long, value_name = "DIR", default_value = "out/make")]
    pub make_dir: PathBuf,

    /// Target architecture (x64, ia32, arm64)
    #[arg(long, value_name = "ARCH", default_value = "x64")]
    pub arch: Arch,

    /// Product name (overrides the manifest package name)
    #[arg(long, value_name = "NAME")]
    pub product_name: Option<String>,

    /// Application version (overrides the manifest version)
    #[arg(long, value_name = "VERSION", env = "MAKER_APP_VERSION")]
    pub app_version: Option<String>,

    /// Only load and validate the config; do not run hooks or write files
    #[arg(long)]
    pub check: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.check && self.app_dir.is_none() {
            return Err("--app-dir is required unless --check is given".to_string());
        }

        if self
            .app_version
            .as_deref()
            .is_some_and(|v| v.trim().is_empty())
        {
            return Err("--app-version cannot be empty".to_string());
        }

        Ok(())
    }
}

//! Command line interface for the NSIS maker config resolver.
//!
//! This module wires argument parsing, config loading and resolution
//! together and reports results on stdout.

mod args;

pub use args::Args;

use crate::error::{CliError, Result};
use crate::maker::{self, MakeContextBuilder, MakerNsisConfig, PackageSettings};
use crate::metadata;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(args).await
}

/// Execute a parsed command line.
pub async fn execute(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let loaded = metadata::load_config(&args.config).await?;
    log::info!("Loaded maker config from {}", args.config.display());

    if args.check {
        check(&loaded.config, &args)?;
        println!("✓ {} is a valid NSIS maker config", args.config.display());
        return Ok(0);
    }

    let mut package: PackageSettings = loaded.metadata.map(Into::into).unwrap_or_default();
    if let Some(name) = args.product_name {
        package.product_name = name;
    }
    if let Some(version) = args.app_version {
        package.version = version;
    }

    let app_dir = args.app_dir.ok_or_else(|| CliError::MissingArgument {
        argument: "--app-dir".to_string(),
    })?;

    let ctx = MakeContextBuilder::new()
        .app_directory(app_dir)
        .make_dir(&args.make_dir)
        .target_arch(args.arch)
        .package_settings(package)
        .build()?;

    let resolved = maker::resolve(&loaded.config, &ctx).await?;
    let written = resolved.write_to(&ctx.output_directory()).await?;

    for path in written {
        println!("{}", path.display());
    }

    Ok(0)
}

/// Validate what can be validated without running hooks.
fn check(config: &MakerNsisConfig, args: &Args) -> Result<()> {
    args.arch.nsis_arch()?;

    if let Some(updater) = &config.updater {
        updater.feed_url()?;
    }

    if let Some(codesign) = &config.codesign {
        let mut codesign = codesign.clone();
        codesign.apply_env_fallbacks();
        if !codesign.has_certificate_source() {
            log::warn!("codesign is configured but no certificate source is set");
        }
    }

    Ok(())
}

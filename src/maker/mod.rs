//! NSIS maker configuration.
//!
//! The maker turns a packaged application directory into a Windows NSIS
//! installer using external tools. This module owns everything up to that
//! handoff: the configuration shape, loading hooks, and resolving the
//! documents the signing utility, the app builder and the updater runtime
//! read.
//!
//! # Example
//!
//! ```no_run
//! use kodegen_maker_nsis::maker::{
//!     AppBuilderConfigHook, MakeContextBuilder, MakerNsisConfig, UpdaterConfig, resolve,
//! };
//!
//! # async fn example() -> kodegen_maker_nsis::maker::Result<()> {
//! let config = MakerNsisConfig {
//!     updater: Some(UpdaterConfig::new("https://example.com/updates")),
//!     ..Default::default()
//! }
//! .with_app_builder_config(AppBuilderConfigHook::from_fn(|| async {
//!     Ok(serde_json::json!({ "appId": "com.example.app" }))
//! }));
//!
//! let ctx = MakeContextBuilder::new()
//!     .app_directory("out/MyApp-win32-x64")
//!     .make_dir("out/make")
//!     .build()?;
//!
//! let resolved = resolve(&config, &ctx).await?;
//! resolved.write_to(&ctx.output_directory()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`config`] - Configuration types
//! - [`context`] - Per-invocation inputs
//! - [`hook`] - The `getAppBuilderConfig` hook
//! - [`resolve`](mod@resolve) - Resolution into tool documents

pub mod config;
pub mod context;
pub mod error;
pub mod hook;
pub mod resolve;

pub use config::{
    AppUpdateConfig, Arch, CodesignOptions, HashAlgorithm, MakerNsisConfig, NSISInstallerMode,
    NsisCompression, NsisSettings, SignOptions, SignParams, UpdaterConfig,
};
pub use context::{MakeContext, MakeContextBuilder, PackageSettings};
pub use error::{Error, Result};
pub use hook::{AppBuilderConfigHook, AppBuilderConfigSource, HookSource};
pub use resolve::{ResolvedMake, resolve};

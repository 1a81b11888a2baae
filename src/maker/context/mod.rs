//! Per-invocation inputs supplied by the maker.
//!
//! A [`MakeContext`] describes one make run: which packaged app directory
//! is being turned into an installer, where outputs go, and for which
//! architecture. It is built with [`MakeContextBuilder`].

mod builder;
mod package;

pub use builder::MakeContextBuilder;
pub use package::PackageSettings;

use super::config::Arch;
use std::path::{Path, PathBuf};

/// Inputs of a single make invocation.
///
/// # Examples
///
/// ```no_run
/// use kodegen_maker_nsis::maker::{Arch, MakeContextBuilder, PackageSettings};
///
/// # fn example() -> kodegen_maker_nsis::maker::Result<()> {
/// let ctx = MakeContextBuilder::new()
///     .app_directory("out/MyApp-win32-x64")
///     .make_dir("out/make")
///     .target_arch(Arch::X64)
///     .package_settings(PackageSettings {
///         product_name: "MyApp".into(),
///         version: "1.0.0".into(),
///         ..Default::default()
///     })
///     .build()?;
/// assert!(ctx.output_directory().ends_with("nsis/x64"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct MakeContext {
    /// Package metadata.
    package: PackageSettings,

    /// Packaged application directory.
    app_directory: PathBuf,

    /// Root directory for make outputs.
    make_dir: PathBuf,

    /// Target architecture.
    target_arch: Arch,
}

impl MakeContext {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the package metadata.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the packaged application directory.
    pub fn app_directory(&self) -> &Path {
        &self.app_directory
    }

    /// Returns the target architecture.
    pub fn target_arch(&self) -> Arch {
        self.target_arch
    }

    /// Directory receiving this run's installer and config documents.
    ///
    /// `<make_dir>/nsis/<arch>`
    pub fn output_directory(&self) -> PathBuf {
        self.make_dir.join("nsis").join(self.target_arch.as_str())
    }

    pub(super) fn new(
        package: PackageSettings,
        app_directory: PathBuf,
        make_dir: PathBuf,
        target_arch: Arch,
    ) -> Self {
        Self {
            package,
            app_directory,
            make_dir,
            target_arch,
        }
    }
}

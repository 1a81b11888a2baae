//! Builder for constructing a [`MakeContext`].

use super::{MakeContext, PackageSettings};
use crate::maker::config::Arch;
use std::path::{Path, PathBuf};

/// Builder for constructing [`MakeContext`].
///
/// # See Also
///
/// - [`MakeContext`] - The built context
#[derive(Default)]
pub struct MakeContextBuilder {
    app_directory: Option<PathBuf>,
    make_dir: Option<PathBuf>,
    package_settings: PackageSettings,
    target_arch: Option<Arch>,
}

impl MakeContextBuilder {
    /// Creates a new context builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the packaged application directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn app_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.app_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the make output root (installers land in `<make_dir>/nsis/<arch>`).
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn make_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.make_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// Default: Empty [`PackageSettings`]
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = settings;
        self
    }

    /// Sets the target architecture.
    ///
    /// Default: [`Arch::X64`]
    pub fn target_arch(mut self, arch: Arch) -> Self {
        self.target_arch = Some(arch);
        self
    }

    /// Builds the context.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `app_directory`
    /// - `make_dir`
    pub fn build(self) -> crate::maker::Result<MakeContext> {
        use crate::maker::error::Context;

        Ok(MakeContext::new(
            self.package_settings,
            self.app_directory.context("app_directory is required")?,
            self.make_dir.context("make_dir is required")?,
            self.target_arch.unwrap_or_default(),
        ))
    }
}

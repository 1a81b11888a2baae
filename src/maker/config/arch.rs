//! Target CPU architecture for the installer.

use crate::maker::error::{Error, Result};
use std::{fmt, str::FromStr};

/// CPU architecture of the packaged application.
///
/// Names follow the Electron convention used by packagers (`x64`, `ia32`,
/// `arm64`, `armv7l`, `universal`). Rust target-triple spellings are also
/// accepted when parsing.
///
/// # Platform Support
///
/// - ✅ NSIS: X64, Ia32, Arm64
/// - ❌ NSIS: Armv7l, Universal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    #[default]
    X64,
    /// x86 / i686 (32-bit)
    Ia32,
    /// AArch64 / ARM64 (64-bit)
    Arm64,
    /// ARMv7 hard-float (32-bit)
    Armv7l,
    /// Fat binary containing several architectures
    Universal,
}

impl Arch {
    /// Electron-style name of the architecture.
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Ia32 => "ia32",
            Arch::Arm64 => "arm64",
            Arch::Armv7l => "armv7l",
            Arch::Universal => "universal",
        }
    }

    /// Map to the architecture name understood by the NSIS target.
    ///
    /// Fails for architectures NSIS installers cannot target.
    pub fn nsis_arch(self) -> Result<&'static str> {
        match self {
            Arch::X64 | Arch::Ia32 | Arch::Arm64 => Ok(self.as_str()),
            _ => Err(Error::ArchError(format!(
                "Unsupported architecture for NSIS: {}",
                self
            ))),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x64" | "x86_64" | "amd64" => Ok(Arch::X64),
            "ia32" | "x86" | "i686" | "i386" => Ok(Arch::Ia32),
            "arm64" | "aarch64" => Ok(Arch::Arm64),
            "armv7l" | "armhf" | "armv7" => Ok(Arch::Armv7l),
            "universal" => Ok(Arch::Universal),
            other => Err(Error::ArchError(format!("Unknown architecture: {other}"))),
        }
    }
}

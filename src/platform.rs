//! Platform and architecture selectors.
//!
//! Release asset names and package-manager path conventions are keyed on
//! these values. They are always passed explicitly rather than read from
//! ambient process state, so every resolver call stays independent and
//! testable.

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Operating systems releases are published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Platform {
    Darwin,
    Linux,
    Windows,
}

impl Platform {
    /// Title-cased OS name as it appears in asset file names.
    pub fn title(&self) -> &'static str {
        match self {
            Platform::Darwin => "Darwin",
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
        }
    }

    /// Platform of the current build, if it is one we publish for.
    pub fn current() -> Option<Platform> {
        match std::env::consts::OS {
            "macos" => Some(Platform::Darwin),
            "linux" => Some(Platform::Linux),
            "windows" => Some(Platform::Windows),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "darwin" | "macos" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}

/// CPU architectures encoded in asset file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Arch {
    Amd64,
    /// 32-bit x86, named `386` in asset files.
    #[value(name = "386")]
    Arch386,
    Arm64,
}

impl Arch {
    /// Architecture component of an asset file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Amd64 => "amd64",
            Arch::Arch386 => "386",
            Arch::Arm64 => "arm64",
        }
    }

    /// Architecture of the current build, if it is one we publish for.
    pub fn current() -> Option<Arch> {
        match std::env::consts::ARCH {
            "x86_64" => Some(Arch::Amd64),
            "x86" => Some(Arch::Arch386),
            "aarch64" => Some(Arch::Arm64),
            _ => None,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "amd64" | "x86_64" => Ok(Arch::Amd64),
            "386" | "x86" | "i386" => Ok(Arch::Arch386),
            "arm64" | "aarch64" => Ok(Arch::Arm64),
            other => Err(format!("Unknown architecture: {}", other)),
        }
    }
}

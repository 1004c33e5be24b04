//! Homebrew install detection.
//!
//! Self-update must not overwrite a binary that Homebrew tracks, so the
//! upgrade advisor checks whether the running executable resolves into a
//! brew-managed location before suggesting a command.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CairnError, Result};
use crate::platform::Platform;

/// Homebrew prefixes that may own the executable on a platform.
fn brew_prefixes(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Darwin => &[
            "/usr/local/Cellar",    // Intel macOS
            "/opt/homebrew/Cellar", // ARM macOS
        ],
        Platform::Linux => &["/home/linuxbrew/.linuxbrew"],
        Platform::Windows => &[],
    }
}

/// Whether a resolved executable path lies under a Homebrew prefix.
fn is_brew_path(path: &Path, platform: Platform) -> bool {
    brew_prefixes(platform)
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Resolved path of the running executable if Homebrew manages it.
///
/// Symlinks are followed before checking. `Ok(None)` means the install is
/// not brew-managed; the only error is failing to resolve the executable
/// path at all.
pub fn detect_brew_install(platform: Platform) -> Result<Option<PathBuf>> {
    let exe = env::current_exe().map_err(CairnError::ExecutablePathUnresolvable)?;
    let resolved = fs::canonicalize(&exe).map_err(CairnError::ExecutablePathUnresolvable)?;

    Ok(is_brew_path(&resolved, platform).then_some(resolved))
}

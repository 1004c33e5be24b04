//! Upgrade advice composition.

use tracing::debug;

use super::source::ReleaseSource;
use super::{brew, resolver, version};
use crate::error::Result;
use crate::platform::Platform;

/// Upgrade notice for the running build, or an empty string when current.
///
/// The message is deterministic given (current version, latest version,
/// managed/unmanaged): a brew-managed install is pointed at Homebrew, any
/// other install at the tool's own `upgrade` subcommand.
pub fn upgrade_message(
    source: &dyn ReleaseSource,
    project: &str,
    current_version: &str,
    platform: Platform,
) -> Result<String> {
    let current = version::parse(current_version)?;
    let latest = resolver::latest(source, project)?;
    let latest_version = version::parse(&latest.tag_name)?;

    if !version::is_newer(&latest_version, &current) {
        debug!(%current, "already on the latest release");
        return Ok(String::new());
    }

    let managed = brew::detect_brew_install(platform)?.is_some();
    Ok(compose_message(
        project,
        current_version,
        &latest.tag_name,
        managed,
    ))
}

/// Deterministic notice text for an available upgrade.
fn compose_message(project: &str, current: &str, latest: &str, managed: bool) -> String {
    let command = if managed {
        format!("brew update && brew upgrade {}", project)
    } else {
        format!("{} upgrade", project)
    };

    format!(
        "A new version of {} is available: {} -> {}\nRun `{}` to install it.",
        project, current, latest, command
    )
}

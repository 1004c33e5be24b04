//! Release resolution against a [`ReleaseSource`].
//!
//! Every function takes the source explicitly; there is no shared state
//! between calls and no caching of transport responses.

use tracing::debug;

use super::assets;
use super::source::{Asset, Release, ReleaseSource};
use crate::error::{CairnError, Result};

/// Latest release of a project, pre-releases included.
///
/// The source lists releases newest first, so this is the head of the list.
pub fn latest(source: &dyn ReleaseSource, project: &str) -> Result<Release> {
    source
        .list_releases(project)?
        .into_iter()
        .next()
        .ok_or_else(|| CairnError::NoReleasesFound {
            project: project.to_string(),
        })
}

/// Latest release of a project that is not flagged as a pre-release.
pub fn latest_stable(source: &dyn ReleaseSource, project: &str) -> Result<Release> {
    let releases = source.list_releases(project)?;

    if releases.is_empty() {
        return Err(CairnError::NoReleasesFound {
            project: project.to_string(),
        });
    }

    releases
        .into_iter()
        .find(|release| !release.prerelease)
        .ok_or_else(|| CairnError::NoStableReleaseFound {
            project: project.to_string(),
        })
}

/// Verify that a tag exists for a project, returning its release.
pub fn version_exists(source: &dyn ReleaseSource, project: &str, tag: &str) -> Result<Release> {
    source.get_release(project, tag)
}

/// Commit reference the tagged release was cut from.
pub fn commit_sha(source: &dyn ReleaseSource, project: &str, tag: &str) -> Result<String> {
    Ok(version_exists(source, project, tag)?.commit_sha)
}

/// Named asset on a release. An empty tag means the latest release.
pub fn release_asset(
    source: &dyn ReleaseSource,
    project: &str,
    tag: &str,
    asset_name: &str,
) -> Result<Asset> {
    let release = if tag.is_empty() {
        latest(source, project)?
    } else {
        version_exists(source, project, tag)?
    };

    debug!(tag = %release.tag_name, asset_name, "matching release asset");

    assets::find_asset(&release, asset_name).map(Asset::clone)
}

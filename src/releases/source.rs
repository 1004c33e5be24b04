//! Release data model and the transport boundary.
//!
//! [`ReleaseSource`] abstracts the release-listing service so resolution
//! logic can be exercised against a fixed in-memory release set instead of
//! a live network call.

use serde::Deserialize;

use crate::error::Result;

/// A tagged, versioned publication of a project.
///
/// Records are built fresh per resolver call from the transport response;
/// nothing here is cached or persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Tag name, e.g. `v0.3.0`.
    pub tag_name: String,
    /// Commit the release was cut from.
    #[serde(default, rename = "target_commitish")]
    pub commit_sha: String,
    /// Whether the release is flagged as not production-stable.
    #[serde(default)]
    pub prerelease: bool,
    /// Downloadable artifacts attached to the release.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// A single downloadable artifact attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    /// File name encoding tool, OS, and architecture.
    pub name: String,
    /// Direct download URL.
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
}

/// Where releases come from.
pub trait ReleaseSource {
    /// List a project's releases, newest first.
    fn list_releases(&self, project: &str) -> Result<Vec<Release>>;

    /// Fetch a single release by tag.
    fn get_release(&self, project: &str, tag: &str) -> Result<Release>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_deserializes_github_fields() {
        let json = r#"{
            "tag_name": "v0.3.0",
            "target_commitish": "4c3bb1a",
            "prerelease": false,
            "assets": [
                {
                    "name": "cairn_Linux_amd64.tar.gz",
                    "browser_download_url": "https://example.com/cairn_Linux_amd64.tar.gz"
                }
            ]
        }"#;

        let release: Release = serde_json::from_str(json).unwrap();

        assert_eq!(release.tag_name, "v0.3.0");
        assert_eq!(release.commit_sha, "4c3bb1a");
        assert!(!release.prerelease);
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].name, "cairn_Linux_amd64.tar.gz");
        assert!(release.assets[0].download_url.starts_with("https://"));
    }

    #[test]
    fn release_optional_fields_default() {
        let json = r#"{"tag_name": "v1.0.0"}"#;

        let release: Release = serde_json::from_str(json).unwrap();

        assert_eq!(release.tag_name, "v1.0.0");
        assert_eq!(release.commit_sha, "");
        assert!(!release.prerelease);
        assert!(release.assets.is_empty());
    }
}

//! Release asset naming and lookup.
//!
//! Asset names are constructed deterministically from (tool, OS, arch), so
//! matching is exact-string, never fuzzy.

use super::resolver;
use super::source::{Asset, Release, ReleaseSource};
use crate::error::{CairnError, Result};
use crate::platform::{Arch, Platform};

/// Archive extension used for published binaries.
const ASSET_EXTENSION: &str = "tar.gz";

/// Deterministic asset file name for a tool on a platform/architecture.
///
/// The OS component is title-cased, e.g. `cairn_Darwin_amd64.tar.gz`.
pub fn asset_name(tool: &str, platform: Platform, arch: Arch) -> String {
    format!("{}_{}_{}.{}", tool, platform.title(), arch, ASSET_EXTENSION)
}

/// Exact-match lookup of a named asset on a release.
pub fn find_asset<'a>(release: &'a Release, name: &str) -> Result<&'a Asset> {
    release
        .assets
        .iter()
        .find(|asset| asset.name == name)
        .ok_or_else(|| CairnError::AssetNotFound {
            asset: name.to_string(),
            tag: release.tag_name.clone(),
        })
}

/// Fully qualified image reference for a project, with the tag it resolved to.
///
/// An explicit tag is used verbatim without an existence check; otherwise the
/// latest release tag is looked up, optionally including pre-releases.
pub fn resolve_image_reference(
    source: &dyn ReleaseSource,
    project: &str,
    explicit_tag: &str,
    base_image: &str,
    include_prerelease: bool,
) -> Result<(String, String)> {
    let tag = if !explicit_tag.is_empty() {
        explicit_tag.to_string()
    } else if include_prerelease {
        resolver::latest(source, project)?.tag_name
    } else {
        resolver::latest_stable(source, project)?.tag_name
    };

    Ok((format!("{}:{}", base_image, tag), tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn asset_name_title_cases_the_os() {
        assert_eq!(
            asset_name("flytectl", Platform::Darwin, Arch::Arch386),
            "flytectl_Darwin_386.tar.gz"
        );
        assert_eq!(
            asset_name("cairn", Platform::Linux, Arch::Amd64),
            "cairn_Linux_amd64.tar.gz"
        );
        assert_eq!(
            asset_name("cairn", Platform::Windows, Arch::Arm64),
            "cairn_Windows_arm64.tar.gz"
        );
    }

    fn manifest_release() -> Release {
        Release {
            tag_name: "v0.15.0".to_string(),
            commit_sha: "abc".to_string(),
            prerelease: false,
            assets: vec![Asset {
                name: "sandbox_manifest.yaml".to_string(),
                download_url: "https://example.com/sandbox_manifest.yaml".to_string(),
            }],
        }
    }

    #[test]
    fn find_asset_matches_exactly() {
        let release = manifest_release();
        let asset = find_asset(&release, "sandbox_manifest.yaml").unwrap();
        assert_eq!(asset.name, "sandbox_manifest.yaml");
    }

    #[test]
    fn find_asset_rejects_mismatched_name() {
        let release = manifest_release();
        let err = find_asset(&release, "test").unwrap_err();
        assert!(matches!(err, CairnError::AssetNotFound { .. }));
        assert!(err.to_string().contains("v0.15.0"));
    }

    #[test]
    fn find_asset_is_not_fuzzy() {
        let release = manifest_release();
        // Prefix of an existing name must not match.
        assert!(find_asset(&release, "sandbox_manifest").is_err());
    }

    struct StubSource {
        releases: Vec<Release>,
    }

    impl ReleaseSource for StubSource {
        fn list_releases(&self, _project: &str) -> Result<Vec<Release>> {
            Ok(self.releases.clone())
        }

        fn get_release(&self, project: &str, tag: &str) -> Result<Release> {
            Err(CairnError::UpstreamLookupFailed {
                project: project.to_string(),
                cause: anyhow!("unexpected get_release for {}", tag),
            })
        }
    }

    fn stub(tags: &[(&str, bool)]) -> StubSource {
        StubSource {
            releases: tags
                .iter()
                .map(|(tag, prerelease)| Release {
                    tag_name: tag.to_string(),
                    commit_sha: String::new(),
                    prerelease: *prerelease,
                    assets: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn image_reference_uses_explicit_tag_verbatim() {
        let source = stub(&[("v0.19.0", false)]);
        let (image, tag) =
            resolve_image_reference(&source, "dind", "v0.19.0", "cr.example.org/sandbox", true)
                .unwrap();
        assert_eq!(tag, "v0.19.0");
        assert_eq!(image, "cr.example.org/sandbox:v0.19.0");
    }

    #[test]
    fn image_reference_resolves_latest_stable() {
        let source = stub(&[("v0.20.0-rc.1", true), ("v0.19.0", false)]);
        let (image, tag) =
            resolve_image_reference(&source, "dind", "", "cr.example.org/sandbox", false).unwrap();
        assert_eq!(tag, "v0.19.0");
        assert!(image.starts_with("cr.example.org/sandbox:"));
    }

    #[test]
    fn image_reference_can_include_prereleases() {
        let source = stub(&[("v0.20.0-rc.1", true), ("v0.19.0", false)]);
        let (_, tag) =
            resolve_image_reference(&source, "dind", "", "cr.example.org/sandbox", true).unwrap();
        assert_eq!(tag, "v0.20.0-rc.1");
    }

    #[test]
    fn image_reference_propagates_resolution_failure() {
        let source = stub(&[]);
        let err = resolve_image_reference(&source, "dind", "", "cr.example.org/sandbox", true)
            .unwrap_err();
        assert!(matches!(err, CairnError::NoReleasesFound { .. }));
    }
}

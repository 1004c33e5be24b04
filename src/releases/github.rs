//! GitHub Releases API transport.
//!
//! A thin blocking client implementing [`ReleaseSource`]. Timeouts live
//! here; callers get no retries and no caching.

use anyhow::anyhow;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::source::{Release, ReleaseSource};
use crate::error::{CairnError, Result};

/// GitHub API root.
const GITHUB_API_URL: &str = "https://api.github.com";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Lists releases for projects under a single GitHub owner.
pub struct GithubSource {
    client: Client,
    base_url: String,
    owner: String,
}

impl GithubSource {
    /// Create a source for projects under `owner` on api.github.com.
    pub fn new(owner: &str) -> Result<Self> {
        Self::with_base_url(owner, GITHUB_API_URL)
    }

    /// Point the client at a different API root (used by tests).
    pub fn with_base_url(owner: &str, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent("cairn")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CairnError::Other(anyhow!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
        })
    }

    fn send(&self, url: &str, project: &str) -> Result<Response> {
        debug!(url, "querying release source");

        self.client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .map_err(|e| CairnError::UpstreamLookupFailed {
                project: project.to_string(),
                cause: e.into(),
            })
    }

    fn read_json<T: DeserializeOwned>(response: Response, url: &str, project: &str) -> Result<T> {
        if !response.status().is_success() {
            return Err(CairnError::UpstreamLookupFailed {
                project: project.to_string(),
                cause: anyhow!("GitHub API returned {} for {}", response.status(), url),
            });
        }

        response.json().map_err(|e| CairnError::UpstreamLookupFailed {
            project: project.to_string(),
            cause: anyhow!("Failed to parse GitHub API response: {}", e),
        })
    }
}

impl ReleaseSource for GithubSource {
    fn list_releases(&self, project: &str) -> Result<Vec<Release>> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.base_url, self.owner, project
        );
        let response = self.send(&url, project)?;
        Self::read_json(response, &url, project)
    }

    fn get_release(&self, project: &str, tag: &str) -> Result<Release> {
        let url = format!(
            "{}/repos/{}/{}/releases/tags/{}",
            self.base_url, self.owner, project, tag
        );
        let response = self.send(&url, project)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CairnError::VersionNotFound {
                tag: tag.to_string(),
                project: project.to_string(),
            });
        }

        Self::read_json(response, &url, project)
    }
}

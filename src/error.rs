//! Error types for cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CairnError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CairnError::Other`) for unexpected errors
//! - All errors should carry enough context (project, tag, asset name) to
//!   render an actionable message for users

use thiserror::Error;

/// Core error type for cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// Version tag did not match `v<major>.<minor>.<patch>[-suffix]`.
    #[error("Malformed version tag: '{tag}'")]
    MalformedVersion { tag: String },

    /// The project has no releases at all.
    #[error("No releases found for project '{project}'")]
    NoReleasesFound { project: String },

    /// Every release of the project is flagged as a pre-release.
    #[error("No stable release found for project '{project}'")]
    NoStableReleaseFound { project: String },

    /// The requested tag does not exist for the project.
    #[error("Version {tag} does not exist for project '{project}'")]
    VersionNotFound { tag: String, project: String },

    /// The release exists but carries no asset with the requested name.
    #[error("Release {tag} has no asset named '{asset}'")]
    AssetNotFound { asset: String, tag: String },

    /// The release source could not be queried. Wraps the transport error.
    #[error("Failed to look up releases for project '{project}': {cause}")]
    UpstreamLookupFailed {
        project: String,
        cause: anyhow::Error,
    },

    /// The running executable's path could not be resolved.
    #[error("Failed to resolve the running executable path: {0}")]
    ExecutablePathUnresolvable(#[source] std::io::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;

//! Cairn - release discovery and self-update advice for CLI tools.
//!
//! Cairn locates the latest release of a named project, validates version
//! tags, resolves platform-specific asset names and download URLs, and
//! composes upgrade notices that respect Homebrew-managed installs.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Platform and architecture selectors
//! - [`releases`] - Release resolution, asset matching, and upgrade advice
//!
//! # Example
//!
//! ```
//! use cairn::platform::{Arch, Platform};
//! use cairn::releases::assets::asset_name;
//!
//! let name = asset_name("cairn", Platform::Linux, Arch::Amd64);
//! assert_eq!(name, "cairn_Linux_amd64.tar.gz");
//! ```
//!
//! For release resolution against a live source, see the integration tests.

pub mod cli;
pub mod error;
pub mod platform;
pub mod releases;

pub use error::{CairnError, Result};

/// Version of the running cairn build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

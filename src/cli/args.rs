//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};

use crate::platform::{Arch, Platform};

/// Cairn - release discovery and self-update advice.
#[derive(Debug, Parser)]
#[command(name = "cairn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// GitHub owner the queried projects live under
    #[arg(long, global = true, env = "CAIRN_OWNER", default_value = "cairn-dev")]
    pub owner: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the latest release tag of a project
    Latest(LatestArgs),

    /// Verify that a release tag exists for a project
    Exists(ExistsArgs),

    /// Print the commit a release was cut from
    Sha(ShaArgs),

    /// Print the download URL of a release asset
    Asset(AssetArgs),

    /// Print a fully qualified image reference for a project
    Image(ImageArgs),

    /// Check whether a newer cairn release is available
    CheckUpdate,
}

/// Arguments for the latest command.
#[derive(Debug, Args)]
pub struct LatestArgs {
    /// Project to query
    pub project: String,

    /// Consider pre-releases as well
    #[arg(long)]
    pub include_prerelease: bool,
}

/// Arguments for the exists command.
#[derive(Debug, Args)]
pub struct ExistsArgs {
    /// Release tag to verify, e.g. v0.15.0
    pub tag: String,

    /// Project to query
    pub project: String,
}

/// Arguments for the sha command.
#[derive(Debug, Args)]
pub struct ShaArgs {
    /// Release tag to resolve
    pub tag: String,

    /// Project to query
    pub project: String,
}

/// Arguments for the asset command.
#[derive(Debug, Args)]
pub struct AssetArgs {
    /// Project to query
    pub project: String,

    /// Release tag; defaults to the latest release
    #[arg(long, default_value = "")]
    pub tag: String,

    /// Asset name override; defaults to the platform archive name
    #[arg(long)]
    pub name: Option<String>,

    /// Target operating system; defaults to the current host
    #[arg(long, value_enum)]
    pub os: Option<Platform>,

    /// Target architecture; defaults to the current host
    #[arg(long, value_enum)]
    pub arch: Option<Arch>,
}

/// Arguments for the image command.
#[derive(Debug, Args)]
pub struct ImageArgs {
    /// Project to query
    pub project: String,

    /// Image name without tag, e.g. cr.example.org/sandbox
    pub base_image: String,

    /// Explicit tag; skips latest-release resolution
    #[arg(long, default_value = "")]
    pub tag: String,

    /// Consider pre-releases when resolving the tag
    #[arg(long)]
    pub include_prerelease: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_latest_with_prerelease_flag() {
        let cli = Cli::try_parse_from(["cairn", "latest", "flyte", "--include-prerelease"]).unwrap();
        match cli.command {
            Commands::Latest(args) => {
                assert_eq!(args.project, "flyte");
                assert!(args.include_prerelease);
            }
            _ => panic!("Expected latest command"),
        }
    }

    #[test]
    fn parses_asset_with_explicit_selectors() {
        let cli = Cli::try_parse_from([
            "cairn", "asset", "cairn", "--tag", "v0.15.0", "--os", "darwin", "--arch", "386",
        ])
        .unwrap();
        match cli.command {
            Commands::Asset(args) => {
                assert_eq!(args.tag, "v0.15.0");
                assert_eq!(args.os, Some(Platform::Darwin));
                assert_eq!(args.arch, Some(Arch::Arch386));
            }
            _ => panic!("Expected asset command"),
        }
    }

    #[test]
    fn asset_tag_defaults_to_empty() {
        let cli = Cli::try_parse_from(["cairn", "asset", "cairn"]).unwrap();
        match cli.command {
            Commands::Asset(args) => assert!(args.tag.is_empty()),
            _ => panic!("Expected asset command"),
        }
    }

    #[test]
    fn owner_flag_is_global() {
        let cli =
            Cli::try_parse_from(["cairn", "latest", "flyte", "--owner", "flyteorg"]).unwrap();
        assert_eq!(cli.owner, "flyteorg");
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["cairn"]).is_err());
    }
}

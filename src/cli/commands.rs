//! Command implementations.
//!
//! Each subcommand is a thin wrapper over the release resolution library;
//! all output is plain human-readable text.

use anyhow::anyhow;
use console::style;

use super::args::{AssetArgs, Cli, Commands, ExistsArgs, ImageArgs, LatestArgs, ShaArgs};
use crate::error::{CairnError, Result};
use crate::platform::{Arch, Platform};
use crate::releases::{assets, resolver, upgrade, GithubSource};

/// Project cairn publishes its own releases under.
const SELF_PROJECT: &str = "cairn";

/// Execute the parsed command against the configured release source.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let source = GithubSource::new(&cli.owner)?;

    match &cli.command {
        Commands::Latest(args) => latest(&source, args),
        Commands::Exists(args) => exists(&source, args),
        Commands::Sha(args) => sha(&source, args),
        Commands::Asset(args) => asset(&source, args),
        Commands::Image(args) => image(&source, args),
        Commands::CheckUpdate => check_update(&source),
    }
}

fn latest(source: &GithubSource, args: &LatestArgs) -> Result<()> {
    let release = if args.include_prerelease {
        resolver::latest(source, &args.project)?
    } else {
        resolver::latest_stable(source, &args.project)?
    };
    println!("{}", release.tag_name);
    Ok(())
}

fn exists(source: &GithubSource, args: &ExistsArgs) -> Result<()> {
    resolver::version_exists(source, &args.project, &args.tag)?;
    println!("{} exists for {}", args.tag, args.project);
    Ok(())
}

fn sha(source: &GithubSource, args: &ShaArgs) -> Result<()> {
    println!("{}", resolver::commit_sha(source, &args.project, &args.tag)?);
    Ok(())
}

fn asset(source: &GithubSource, args: &AssetArgs) -> Result<()> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => {
            let os = args.os.or_else(Platform::current).ok_or_else(|| {
                CairnError::Other(anyhow!("Unsupported host platform; pass --os"))
            })?;
            let arch = args.arch.or_else(Arch::current).ok_or_else(|| {
                CairnError::Other(anyhow!("Unsupported host architecture; pass --arch"))
            })?;
            assets::asset_name(&args.project, os, arch)
        }
    };

    let asset = resolver::release_asset(source, &args.project, &args.tag, &name)?;
    println!("{}", asset.download_url);
    Ok(())
}

fn image(source: &GithubSource, args: &ImageArgs) -> Result<()> {
    let (image, _tag) = assets::resolve_image_reference(
        source,
        &args.project,
        &args.tag,
        &args.base_image,
        args.include_prerelease,
    )?;
    println!("{}", image);
    Ok(())
}

fn check_update(source: &GithubSource) -> Result<()> {
    let platform = Platform::current()
        .ok_or_else(|| CairnError::Other(anyhow!("Unsupported host platform")))?;
    let current = format!("v{}", crate::VERSION);

    let message = upgrade::upgrade_message(source, SELF_PROJECT, &current, platform)?;
    if message.is_empty() {
        println!("cairn {} is up to date", crate::VERSION);
    } else {
        println!("{}", style(message).yellow());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_project_matches_binary_name() {
        assert_eq!(SELF_PROJECT, "cairn");
    }

    #[test]
    fn current_version_forms_a_valid_tag() {
        let tag = format!("v{}", crate::VERSION);
        assert!(crate::releases::version::parse(&tag).is_ok());
    }
}

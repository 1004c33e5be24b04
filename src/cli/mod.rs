//! Command-line interface for Cairn.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{AssetArgs, Cli, Commands, ExistsArgs, ImageArgs, LatestArgs, ShaArgs};
pub use commands::dispatch;

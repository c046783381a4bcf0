//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// venvctl - Manage a project's Python virtual environment.
#[derive(Debug, Parser)]
#[command(name = "venvctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default venvctl.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Platform identifier to act as (e.g. linux, win32)
    #[arg(long, global = true, env = "VENVCTL_PLATFORM", value_name = "ID")]
    pub platform: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that the venv has not been moved and its tools run
    Check,

    /// Create the venv and install all requirements
    Create,

    /// Create the venv if missing, otherwise re-sync it, then check it
    Ensure(EnsureArgs),

    /// Remove the venv
    Rm(RmArgs),

    /// Compile requirements/*.in into pinned per-platform manifests
    Compile,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ensure` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnsureArgs {
    /// Treat an existing venv as up to date instead of re-syncing it
    #[arg(long)]
    pub quick: bool,
}

/// Arguments for the `rm` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RmArgs {
    /// Succeed when there is no venv to remove
    #[arg(long)]
    pub ignore_missing: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

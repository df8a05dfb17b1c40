/* src/cli/core/src/main.rs */

mod build;
mod clean;
mod config;
mod shell;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use build::run::BuildFlags;
use config::{SiteConfig, resolve_site_config};

#[derive(Parser)]
#[command(name = "pgfsite", about = "Publish lwarp PGF/TikZ manual pages as a static site")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Transform the manual pages into the output directory
  Build {
    /// Path to pgfsite.toml (defaults to ./pgfsite.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Skip the external formatter
    #[arg(long)]
    no_format: bool,
  },
  /// Remove the output directory
  Clean {
    /// Path to pgfsite.toml (defaults to ./pgfsite.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Resolve config (explicit, ./pgfsite.toml, or defaults) and its base dir
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, SiteConfig)> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  resolve_site_config(explicit.as_deref(), &cwd)
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Build { config, no_format } => {
      let (base_dir, site_config) = resolve_config(config)?;
      build::run::run_build(&site_config, &base_dir, BuildFlags { format: !no_format })?;
    }
    Command::Clean { config } => {
      let (base_dir, site_config) = resolve_config(config)?;
      clean::run_clean(&site_config, &base_dir)?;
    }
  }

  Ok(())
}

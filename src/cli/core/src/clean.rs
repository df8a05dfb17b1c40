/* src/cli/core/src/clean.rs */

// `pgfsite clean` command: removes the generated site.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::ui;

pub fn run_clean(config: &SiteConfig, base_dir: &Path) -> Result<()> {
  ui::arrow("cleaning output");
  delete_dir_if_exists(&base_dir.join(&config.output.dir))?;
  ui::ok("clean complete");
  Ok(())
}

fn delete_dir_if_exists(path: &Path) -> Result<()> {
  if path.exists() {
    std::fs::remove_dir_all(path)
      .with_context(|| format!("failed to remove {}", path.display()))?;
    ui::detail(&format!("deleted {}", path.display()));
  }
  Ok(())
}

/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::SiteConfig;

pub const CONFIG_FILE: &str = "pgfsite.toml";

/// `pgfsite.toml` in `dir`, if present. No upward search: the tool runs
/// inside the generator's output directory.
pub fn find_site_config(dir: &Path) -> Option<PathBuf> {
  let candidate = dir.join(CONFIG_FILE);
  candidate.is_file().then_some(candidate)
}

pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: SiteConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}

/// Resolve the config (explicit path, file in `cwd`, or defaults) and the
/// directory that configured paths are relative to.
pub fn resolve_site_config(explicit: Option<&Path>, cwd: &Path) -> Result<(PathBuf, SiteConfig)> {
  let path = match explicit {
    Some(p) => Some(p.to_path_buf()),
    None => find_site_config(cwd),
  };
  let Some(path) = path else {
    return Ok((cwd.to_path_buf(), SiteConfig::default()));
  };
  let config = load_site_config(&path)?;
  let base_dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
    _ => cwd.to_path_buf(),
  };
  Ok((base_dir, config))
}

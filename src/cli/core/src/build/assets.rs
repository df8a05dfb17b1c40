/* src/cli/core/src/build/assets.rs */

// Static files that ship next to the pages unchanged.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ui::{self, DIM, RESET};

/// Copy named files from `input_dir` to `out_dir`. A missing file is an error.
pub(super) fn copy_files(input_dir: &Path, out_dir: &Path, files: &[String]) -> Result<()> {
  for file in files {
    let src = input_dir.join(file);
    let dst = out_dir.join(file);
    if !src.is_file() {
      bail!("asset {} not found", src.display());
    }
    if let Some(parent) = dst.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let size = std::fs::copy(&src, &dst)
      .with_context(|| format!("failed to copy {} -> {}", src.display(), dst.display()))?;
    ui::detail_ok(&format!("{file}  {DIM}({}){RESET}", ui::format_size(size)));
  }
  Ok(())
}

/// Recursively copy `src` into `dst`, merging with anything already there.
/// Returns the number of files copied.
pub(super) fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
  std::fs::create_dir_all(dst).with_context(|| format!("failed to create {}", dst.display()))?;
  let mut copied = 0;
  let entries =
    std::fs::read_dir(src).with_context(|| format!("failed to read {}", src.display()))?;
  for entry in entries {
    let entry = entry.with_context(|| format!("failed to read {}", src.display()))?;
    let from = entry.path();
    let to = dst.join(entry.file_name());
    if entry.file_type()?.is_dir() {
      copied += copy_dir(&from, &to)?;
    } else {
      std::fs::copy(&from, &to)
        .with_context(|| format!("failed to copy {} -> {}", from.display(), to.display()))?;
      copied += 1;
    }
  }
  Ok(copied)
}

/* src/cli/core/src/build/run.rs */

// Build orchestrator: assets, pages, images, then the formatter.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::assets::{copy_dir, copy_files};
use super::emit::{list_pages, output_name, process_page};
use crate::config::SiteConfig;
use crate::shell::run_command;
use crate::ui::{self, DIM, RESET};

#[derive(Debug, Clone, Copy)]
pub struct BuildFlags {
  /// Run the configured formatter over the output dir.
  pub format: bool,
}

pub fn run_build(config: &SiteConfig, base_dir: &Path, flags: BuildFlags) -> Result<()> {
  let build_date = chrono::Local::now().date_naive();
  build_site(config, base_dir, flags, build_date)
}

fn build_site(
  config: &SiteConfig,
  base_dir: &Path,
  flags: BuildFlags,
  build_date: NaiveDate,
) -> Result<()> {
  let started = Instant::now();
  let input_dir = base_dir.join(&config.input.dir);
  let out_dir = base_dir.join(&config.output.dir);
  let format_command = config.format_command_line().filter(|_| flags.format);
  let total: u32 = if format_command.is_some() { 4 } else { 3 };

  ui::banner("build");
  std::fs::create_dir_all(&out_dir)
    .with_context(|| format!("failed to create {}", out_dir.display()))?;

  // [1] Stylesheets and scripts
  ui::step(1, total, "Copying stylesheets and scripts");
  copy_files(&input_dir, &out_dir, &config.input.stylesheets)?;
  copy_files(&input_dir, &out_dir, &config.input.scripts)?;
  ui::blank();

  // [2] Pages
  ui::step(2, total, "Processing pages");
  let options = config.transform_options();
  let pages = list_pages(&input_dir, config)?;
  let mut warning_count = 0;
  for name in &pages {
    ui::arrow(&format!("processing {name}"));
    let warnings = match process_page(&input_dir, &out_dir, name, config, &options, build_date) {
      Ok(w) => w,
      Err(e) => {
        ui::fail(name);
        return Err(e);
      }
    };
    for w in &warnings {
      ui::warn(w);
    }
    warning_count += warnings.len();
    if output_name(name, config) != name {
      ui::detail(&format!("{DIM}written as {}{RESET}", output_name(name, config)));
    }
  }
  ui::detail_ok(&format!("{} pages", pages.len()));
  ui::blank();

  // [3] Images
  ui::step(3, total, "Copying images");
  let images_src = input_dir.join(&config.input.images_dir);
  if images_src.is_dir() {
    let copied = copy_dir(&images_src, &out_dir.join(&config.input.images_dir))?;
    ui::detail_ok(&format!("{copied} files from {}", config.input.images_dir));
  } else {
    ui::warn(&format!("images directory {} not found", images_src.display()));
    warning_count += 1;
  }
  ui::blank();

  // [4] Formatter
  if let Some(command) = &format_command {
    ui::step(4, total, "Formatting output");
    run_command(base_dir, command, "formatter")?;
    ui::blank();
  }

  let elapsed = started.elapsed().as_secs_f64();
  ui::ok(&format!("build complete in {elapsed:.1}s"));
  ui::detail(&format!(
    "{} pages \u{00b7} {warning_count} warnings \u{00b7} {}",
    pages.len(),
    config.output.dir,
  ));
  Ok(())
}

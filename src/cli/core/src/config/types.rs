/* src/cli/core/src/config/types.rs */

use std::path::{Component, Path, PathBuf};

use anyhow::{Result, bail};
use pgfsite_transform::{AnchorOptions, SiteOptions, TocOptions, TransformOptions};
use serde::Deserialize;

use crate::shell::quote_arg;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
  #[serde(default)]
  pub input: InputSection,
  #[serde(default)]
  pub output: OutputSection,
  #[serde(default)]
  pub toc: TocOptions,
  #[serde(default)]
  pub anchors: AnchorOptions,
  #[serde(default)]
  pub site: SiteOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSection {
  #[serde(default = "default_input_dir")]
  pub dir: String,
  /// HTML files in the input dir that are not manual pages.
  #[serde(default = "default_exclude")]
  pub exclude: Vec<String>,
  /// Written as `index.html` with the reduced landing treatment.
  #[serde(default = "default_landing_page")]
  pub landing_page: String,
  #[serde(default = "default_stylesheets")]
  pub stylesheets: Vec<String>,
  #[serde(default = "default_scripts")]
  pub scripts: Vec<String>,
  #[serde(default = "default_images_dir")]
  pub images_dir: String,
}

impl Default for InputSection {
  fn default() -> Self {
    Self {
      dir: default_input_dir(),
      exclude: default_exclude(),
      landing_page: default_landing_page(),
      stylesheets: default_stylesheets(),
      scripts: default_scripts(),
      images_dir: default_images_dir(),
    }
  }
}

fn default_input_dir() -> String {
  ".".to_string()
}

fn default_exclude() -> Vec<String> {
  vec!["description.html".to_string(), "pgfmanual_html.html".to_string()]
}

fn default_landing_page() -> String {
  "index.html".to_string()
}

fn default_stylesheets() -> Vec<String> {
  vec!["style.css".to_string(), "lwarp.css".to_string()]
}

fn default_scripts() -> Vec<String> {
  vec!["pgfmanual.js".to_string()]
}

fn default_images_dir() -> String {
  "pgfmanual-images".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
  #[serde(default = "default_output_dir")]
  pub dir: String,
  /// Run over the output dir after the build; the dir is appended as the
  /// last argument. Empty disables the step.
  #[serde(default = "default_format_command")]
  pub format_command: String,
}

impl Default for OutputSection {
  fn default() -> Self {
    Self { dir: default_output_dir(), format_command: default_format_command() }
  }
}

fn default_output_dir() -> String {
  "processed".to_string()
}

fn default_format_command() -> String {
  "prettier --write".to_string()
}

/// Lexical form used to compare configured dirs: `./a/` and `a` are equal.
fn normalized(dir: &str) -> PathBuf {
  let path: PathBuf =
    Path::new(dir).components().filter(|c| !matches!(c, Component::CurDir)).collect();
  if path.as_os_str().is_empty() { PathBuf::from(".") } else { path }
}

impl SiteConfig {
  pub fn validate(&self) -> Result<()> {
    if self.output.dir.trim().is_empty() {
      bail!("output.dir must not be empty");
    }
    if normalized(&self.output.dir) == normalized(&self.input.dir) {
      bail!("output.dir \"{}\" must differ from input.dir", self.output.dir);
    }
    if self.input.exclude.contains(&self.input.landing_page) {
      bail!("input.landing_page \"{}\" is listed in input.exclude", self.input.landing_page);
    }
    Ok(())
  }

  pub fn transform_options(&self) -> TransformOptions {
    TransformOptions {
      toc: self.toc.clone(),
      anchors: self.anchors.clone(),
      site: self.site.clone(),
    }
  }

  /// Full formatter command line, or `None` when disabled.
  pub fn format_command_line(&self) -> Option<String> {
    let command = self.output.format_command.trim();
    if command.is_empty() {
      return None;
    }
    Some(format!("{command} {}", quote_arg(&self.output.dir)))
  }
}

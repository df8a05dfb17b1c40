/* src/cli/core/src/build/emit.rs */

// Page discovery, per-page transform and write-out.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pgfsite_transform::{Page, TransformOptions, render_page};

use crate::config::SiteConfig;

/// HTML files in the input dir, minus exclusions, in sorted order.
pub(super) fn list_pages(input_dir: &Path, config: &SiteConfig) -> Result<Vec<String>> {
  let entries = std::fs::read_dir(input_dir)
    .with_context(|| format!("failed to read {}", input_dir.display()))?;
  let mut pages = Vec::new();
  for entry in entries {
    let entry = entry.with_context(|| format!("failed to read {}", input_dir.display()))?;
    if !entry.file_type()?.is_file() {
      continue;
    }
    let Some(name) = entry.file_name().to_str().map(str::to_string) else {
      continue;
    };
    if name.ends_with(".html") && !config.input.exclude.contains(&name) {
      pages.push(name);
    }
  }
  pages.sort();
  Ok(pages)
}

/// The landing page is always published as `index.html`.
pub(super) fn output_name<'a>(name: &'a str, config: &SiteConfig) -> &'a str {
  if name == config.input.landing_page { "index.html" } else { name }
}

/// Transform one page and write it. Returns the page's warnings.
pub(super) fn process_page(
  input_dir: &Path,
  out_dir: &Path,
  name: &str,
  config: &SiteConfig,
  options: &TransformOptions,
  build_date: NaiveDate,
) -> Result<Vec<String>> {
  let src = input_dir.join(name);
  let raw =
    std::fs::read_to_string(&src).with_context(|| format!("failed to read {}", src.display()))?;
  let page = Page { raw: &raw, landing: name == config.input.landing_page, build_date };
  let rendered = render_page(page, options, |img| std::fs::read_to_string(input_dir.join(img)).ok())
    .with_context(|| format!("failed to process {name}"))?;

  let dst = out_dir.join(output_name(name, config));
  std::fs::write(&dst, &rendered.html)
    .with_context(|| format!("failed to write {}", dst.display()))?;
  Ok(rendered.warnings)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lists_sorted_pages_without_exclusions() {
    let tmp = tempfile::tempdir().unwrap();
    for name in ["b.html", "a.html", "description.html", "style.css", "pgfmanual_html.html"] {
      std::fs::write(tmp.path().join(name), "").unwrap();
    }
    std::fs::create_dir(tmp.path().join("dir.html")).unwrap();
    let pages = list_pages(tmp.path(), &SiteConfig::default()).unwrap();
    assert_eq!(pages, ["a.html", "b.html"]);
  }

  #[test]
  fn landing_page_is_renamed() {
    let mut config = SiteConfig::default();
    config.input.landing_page = "home.html".to_string();
    assert_eq!(output_name("home.html", &config), "index.html");
    assert_eq!(output_name("index.html", &config), "index.html");
    assert_eq!(output_name("pgfmanual-en-base.html", &config), "pgfmanual-en-base.html");
  }

  #[test]
  fn landing_page_written_with_header() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    std::fs::write(
      input.path().join("index.html"),
      r#"<html><head></head><body><a href="pgfmanual-en-base.html#x">base</a></body></html>"#,
    )
    .unwrap();
    let config = SiteConfig::default();
    let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    let warnings = process_page(
      input.path(),
      out.path(),
      "index.html",
      &config,
      &config.transform_options(),
      date,
    )
    .unwrap();
    assert!(warnings.is_empty());

    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("<header>"));
    assert!(html.contains(r#"href="pgfmanual-en-base""#));
    assert!(html.contains("Last updated: 2024-05-06"));
  }

  #[test]
  fn broken_page_names_the_file() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    std::fs::write(input.path().join("broken.html"), "<html><body><p>no toc</p></body></html>")
      .unwrap();
    let config = SiteConfig::default();
    let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    let err = process_page(
      input.path(),
      out.path(),
      "broken.html",
      &config,
      &config.transform_options(),
      date,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "failed to process broken.html");
    assert!(!out.path().join("broken.html").exists());
  }
}

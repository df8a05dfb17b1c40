/* src/cli/transform/src/pipeline.rs */

// Per-document driver: runs every pass in order over one parsed page.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::anchors::{self, AnchorOptions};
use crate::dom;
use crate::inject::{self, SiteOptions};
use crate::links;
use crate::normalize::normalize_whitespace;
use crate::toc::{self, TocOptions};

#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
  pub toc: TocOptions,
  pub anchors: AnchorOptions,
  pub site: SiteOptions,
}

/// One input document.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
  pub raw: &'a str,
  /// The site's landing page gets the reduced treatment.
  pub landing: bool,
  pub build_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Rendered {
  pub html: String,
  pub warnings: Vec<String>,
}

/// Transform one page. `read_svg` resolves an image `src` to file contents.
pub fn render_page(
  page: Page<'_>,
  options: &TransformOptions,
  read_svg: impl FnMut(&str) -> Option<String>,
) -> Result<Rendered> {
  let math_free = inject::has_only_boilerplate_math(page.raw);
  let doc = dom::parse(page.raw);
  let mut warnings = Vec::new();

  if page.landing {
    links::rewrite_links(&doc, true)?;
    if math_free {
      inject::strip_mathjax(&doc)?;
    }
  } else {
    anchors::normalize_heading_anchors(&doc, &options.anchors)?;
    warnings.extend(toc::reduce_chapter_toc(&doc, &options.toc).context("sidebar toc")?);
    toc::build_page_toc(&doc)?;
    if math_free {
      inject::strip_mathjax(&doc)?;
    }
    anchors::link_definition_anchors(&doc, &options.anchors)?;
    links::rewrite_links(&doc, false)?;
    inject::remove_navigation(&doc)?;
    inject::add_clipboard_buttons(&doc)?;
    warnings.extend(inject::size_svg_images(&doc, read_svg)?);
  }

  inject::add_footer(&doc, &options.site, page.build_date)?;
  inject::add_header(&doc, &options.site)?;

  let html = normalize_whitespace(&dom::serialize(&doc)?);
  Ok(Rendered { html, warnings })
}

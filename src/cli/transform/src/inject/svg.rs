/* src/cli/transform/src/inject/svg.rs */

// Give `<img src="*.svg">` explicit pixel dimensions taken from the SVG's
// root element, so the browser can lay out the page before images load.

use std::sync::OnceLock;

use anyhow::Result;
use kuchiki::NodeRef;
use regex::Regex;

use crate::dom;

/// dvisvgm writes sizes in TeX points.
pub const PT_TO_PX: f64 = 1.33333;

fn length_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^\s*(\d+(?:\.\d*)?|\.\d+)\s*(pt|px)?\s*$").unwrap())
}

fn parse_length(value: &str) -> Option<f64> {
  let caps = length_re().captures(value)?;
  let number: f64 = caps[1].parse().ok()?;
  match caps.get(2).map(|m| m.as_str()) {
    Some("px") => Some(number),
    _ => Some(number * PT_TO_PX),
  }
}

/// Read the root `<svg>` width and height, converted to whole pixels.
pub fn parse_svg_size(svg_source: &str) -> Option<(u32, u32)> {
  let doc = dom::parse(svg_source);
  let root = dom::select_one(&doc, "svg")?;
  let width = parse_length(&dom::attr(&root, "width")?)?;
  let height = parse_length(&dom::attr(&root, "height")?)?;
  Some((width.round() as u32, height.round() as u32))
}

/// Size every SVG image. `read` resolves an `src` to the file's contents.
/// Returns a warning per image that could not be sized.
pub fn size_svg_images(
  doc: &NodeRef,
  mut read: impl FnMut(&str) -> Option<String>,
) -> Result<Vec<String>> {
  let mut warnings = Vec::new();
  for img in dom::select_all(doc, "img[src]")? {
    let Some(src) = dom::attr(&img, "src") else {
      continue;
    };
    if !src.ends_with(".svg") {
      continue;
    }
    let Some(source) = read(&src) else {
      warnings.push(format!("svg image {src} not found"));
      continue;
    };
    let Some((width, height)) = parse_svg_size(&source) else {
      warnings.push(format!("svg image {src} has no usable width/height"));
      continue;
    };
    dom::set_attr(&img, "width", &width.to_string());
    dom::set_attr(&img, "height", &height.to_string());
  }
  Ok(warnings)
}

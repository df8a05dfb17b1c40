/* src/cli/transform/src/anchors.rs */

// Permalink anchors: human-readable link targets are moved into their
// headings, and definition entries get a pilcrow link.

use anyhow::Result;
use kuchiki::NodeRef;
use serde::Deserialize;

use crate::dom::{self, escape_html};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnchorOptions {
  /// Substring that marks ids assigned by the generator.
  pub generated_marker: String,
  /// Substring an entry headline's anchor id must contain to get a permalink.
  pub definition_marker: String,
}

impl Default for AnchorOptions {
  fn default() -> Self {
    Self { generated_marker: "pgfmanual-auto".to_string(), definition_marker: "pgf".to_string() }
  }
}

/// Find the first directly following `<a id>` with a non-generated id.
/// Generated anchors are stepped over; anything else ends the search.
fn adjacent_named_anchor(heading: &NodeRef, generated_marker: &str) -> Option<NodeRef> {
  for sibling in heading.following_siblings() {
    if dom::is_ignorable(&sibling) {
      continue;
    }
    if !dom::is_tag(&sibling, "a") {
      return None;
    }
    let id = dom::attr(&sibling, "id")?;
    if id.contains(generated_marker) {
      continue;
    }
    return Some(sibling);
  }
  None
}

/// Move each h5/h6's human-readable anchor to be the heading's first child.
/// Returns the number of anchors moved.
pub fn normalize_heading_anchors(doc: &NodeRef, options: &AnchorOptions) -> Result<usize> {
  let mut moved = 0;
  for heading in dom::select_all(doc, "h5, h6")? {
    if let Some(anchor) = adjacent_named_anchor(&heading, &options.generated_marker) {
      anchor.detach();
      heading.prepend(anchor);
      moved += 1;
    }
  }
  Ok(moved)
}

/// Append a `¶` permalink to every `.entryheadline` whose leading anchor id
/// carries the definition marker. Returns the number of links added.
pub fn link_definition_anchors(doc: &NodeRef, options: &AnchorOptions) -> Result<usize> {
  let mut added = 0;
  for entry in dom::select_all(doc, ".entryheadline")? {
    let Some(paragraph) = entry.children().find(|c| dom::is_tag(c, "p")) else {
      continue;
    };
    let Some(anchor) = paragraph.children().find(|c| dom::is_tag(c, "a")) else {
      continue;
    };
    let Some(id) = dom::attr(&anchor, "id") else {
      continue;
    };
    if !id.contains(&options.definition_marker) {
      continue;
    }
    let link =
      dom::element(&format!(r##"<a href="#{}" class="anchor-link">¶</a>"##, escape_html(&id)))?;
    paragraph.append(link);
    added += 1;
  }
  Ok(added)
}

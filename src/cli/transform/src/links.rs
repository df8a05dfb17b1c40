/* src/cli/transform/src/links.rs */

// Internal link cleanup: pages are served without the `.html` suffix and
// the index lives at `/`.

use anyhow::Result;
use kuchiki::NodeRef;

use crate::dom;

/// Normalize one href. `landing` drops fragments, since cross-page anchors
/// mean nothing on the landing page. Idempotent.
pub fn rewrite_href(href: &str, landing: bool) -> String {
  let mut out = href.replace(".html", "");
  if landing && let Some((base, _)) = out.split_once('#') {
    out = base.to_string();
  }
  if out == "index" {
    return "/".to_string();
  }
  out
}

/// Rewrite every `<a href>` in the document. Returns the number changed.
pub fn rewrite_links(doc: &NodeRef, landing: bool) -> Result<usize> {
  let mut changed = 0;
  for link in dom::select_all(doc, "a[href]")? {
    let Some(href) = dom::attr(&link, "href") else {
      continue;
    };
    let rewritten = rewrite_href(&href, landing);
    if rewritten != href {
      dom::set_attr(&link, "href", &rewritten);
      changed += 1;
    }
  }
  Ok(changed)
}

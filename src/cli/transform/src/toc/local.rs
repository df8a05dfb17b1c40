/* src/cli/transform/src/toc/local.rs */

// "On this page" box listing the page's own h5/h6 headings.

use anyhow::{Context, Result};
use kuchiki::NodeRef;

use crate::dom::{self, escape_html};

const LOCAL_HEADINGS: &str = "h5, h6";

/// Build the local TOC and insert it as the first child of `.bodyandsidetoc`.
/// Returns the number of headings listed.
pub fn build_page_toc(doc: &NodeRef) -> Result<usize> {
  let container =
    dom::select_one(doc, ".bodyandsidetoc").context("page has no .bodyandsidetoc container")?;

  let mut items = String::new();
  let mut count = 0;
  for heading in dom::select_all(doc, LOCAL_HEADINGS)? {
    let (Some(id), Some(tag)) = (dom::attr(&heading, "id"), dom::tag_name(&heading)) else {
      continue;
    };
    items.push_str(&format!(
      r##"<p class="toc-{tag}"><a href="#{}">{}</a></p>"##,
      escape_html(&id),
      escape_html(&dom::trimmed_text(&heading)),
    ));
    count += 1;
  }

  let block = dom::element(&format!(
    concat!(
      r#"<div class="sidetoccontainer" id="local-toc-container">"#,
      r#"<nav class="sidetoc">"#,
      r#"<div class="sidetoctitle"><p>On this page</p></div>"#,
      r#"<div class="sidetoccontents">{items}</div>"#,
      r#"</nav></div>"#,
    ),
    items = items,
  ))?;
  container.prepend(block);
  Ok(count)
}

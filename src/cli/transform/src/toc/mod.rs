/* src/cli/transform/src/toc/mod.rs */

// Sidebar table of contents: the shared chapter TOC is cut down to the
// current chapter, and a local TOC is built from the page's subheadings.

mod apply;
mod entry;
mod label;
mod local;
mod plan;

pub use apply::apply_toc;
pub use entry::{TocEntries, TocEntry, collect_entries};
pub use local::build_page_toc;
pub use plan::{EntryKey, EntryKind, TocGroup, TocPlan, plan_toc};

use anyhow::{Context, Result, bail};
use kuchiki::NodeRef;
use serde::Deserialize;

use crate::dom;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TocOptions {
  /// Page name of the introduction link, which belongs to no part.
  pub intro_href: String,
  /// Fail when no sidebar entry matches the page.
  pub require_current: bool,
}

impl Default for TocOptions {
  fn default() -> Self {
    Self { intro_href: "index-0".to_string(), require_current: true }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
  /// A whole chapter; identified by its `<h2>`.
  Chapter,
  /// A section split off a chapter; identified by its first `<h4>`.
  Section,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIdentity {
  pub kind: PageKind,
  pub file_id: String,
}

/// Work out which sidebar entry a page corresponds to.
pub fn page_identity(doc: &NodeRef) -> Result<PageIdentity> {
  let (kind, heading) = match dom::select_one(doc, "h4") {
    Some(h4) => (PageKind::Section, h4),
    None => (PageKind::Chapter, dom::select_one(doc, "h2").context("page has neither h4 nor h2")?),
  };
  let file_id = dom::attr(&heading, "id")
    .with_context(|| format!("page heading {:?} has no id", dom::trimmed_text(&heading)))?;
  Ok(PageIdentity { kind, file_id })
}

/// Reduce the page's sidebar to the current chapter. Returns warnings for
/// irregular entries.
pub fn reduce_chapter_toc(doc: &NodeRef, options: &TocOptions) -> Result<Vec<String>> {
  let identity = page_identity(doc)?;
  let container =
    dom::select_one(doc, ".sidetoccontents").context("page has no .sidetoccontents sidebar")?;

  let mut warnings = Vec::new();
  let entries = collect_entries(&container, options, &mut warnings);
  let plan = plan_toc(entries.keys(), &identity.file_id);

  if plan.current_group.is_none() {
    if options.require_current {
      bail!("no toc entry matches page id {:?}", identity.file_id);
    }
    warnings.push(format!("no toc entry matches page id {:?}", identity.file_id));
  }

  let current_part = apply_toc(entries, &plan, &mut warnings)?;
  if identity.kind == PageKind::Section
    && let Some(link) = current_part
  {
    insert_part_heading(doc, &link)?;
  }
  Ok(warnings)
}

/// Section pages repeat their chapter title under the page title.
fn insert_part_heading(doc: &NodeRef, part_link: &NodeRef) -> Result<()> {
  let h1 = dom::select_one(doc, "h1").context("section page has no h1")?;
  let label = dom::inner_html(part_link)?;
  let heading = dom::element(&format!(r#"<h2 class="inserted">{label}</h2>"#))?;
  h1.insert_after(heading);
  Ok(())
}

/* src/cli/transform/src/toc/apply.rs */

// Mutation phase of the chapter TOC reduction: one batch of removals and
// class changes driven by a finished `TocPlan`.

use anyhow::{Result, bail};
use kuchiki::NodeRef;

use super::entry::TocEntries;
use super::plan::TocPlan;
use crate::dom;

/// Apply `plan` to the sidebar. Consumes the entries: a sidebar is reduced
/// once. Returns the current part's link, if any.
pub fn apply_toc(
  entries: TocEntries,
  plan: &TocPlan,
  warnings: &mut Vec<String>,
) -> Result<Option<NodeRef>> {
  let entries = entries.into_vec();

  for &index in &plan.orphans {
    let entry = &entries[index];
    warnings.push(format!("toc section before any part, dropped: {}", entry.href));
    entry.node.detach();
  }

  if let Some(index) = plan.current_entry {
    let node = &entries[index].node;
    if let Some(existing) = dom::attr(node, "class") {
      bail!("toc entry {} already carries class {existing:?}", entries[index].href);
    }
    dom::set_attr(node, "class", "current");
  }

  for index in plan.collapsed_sections() {
    entries[index].node.detach();
  }

  let Some(group) = plan.current() else {
    return Ok(None);
  };
  dom::add_class(&entries[group.part].node, "current-part");
  for &child in &group.children {
    dom::add_class(&entries[child].node, "current-part");
  }
  Ok(Some(entries[group.part].link.clone()))
}

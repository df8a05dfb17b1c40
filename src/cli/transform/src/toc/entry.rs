/* src/cli/transform/src/toc/entry.rs */

// Read the sidebar's `<p>` entries, normalize their links, and classify
// them. Home links and entries without a fragment are removed here, before
// grouping sees them.

use kuchiki::NodeRef;

use super::TocOptions;
use super::label::{shorten_long_label, strip_number_marker};
use super::plan::{EntryKey, EntryKind};
use crate::dom;

/// One surviving sidebar entry.
#[derive(Debug, Clone)]
pub struct TocEntry {
  /// The `<p>` wrapper; receives `current` / `current-part`.
  pub node: NodeRef,
  /// The `<a>` inside it.
  pub link: NodeRef,
  /// Rewritten href (page name only).
  pub href: String,
  pub key: EntryKey,
}

/// Entries of one sidebar, in document order. Consumed by `apply_toc`.
#[derive(Debug)]
pub struct TocEntries {
  entries: Vec<TocEntry>,
}

impl TocEntries {
  pub fn keys(&self) -> impl Iterator<Item = &EntryKey> {
    self.entries.iter().map(|e| &e.key)
  }

  pub(super) fn into_vec(self) -> Vec<TocEntry> {
    self.entries
  }
}

/// Collect, normalize and classify the entries under `container`.
pub fn collect_entries(
  container: &NodeRef,
  options: &TocOptions,
  warnings: &mut Vec<String>,
) -> TocEntries {
  let paragraphs: Vec<NodeRef> = container.children().filter(|c| dom::is_tag(c, "p")).collect();
  let mut entries = Vec::with_capacity(paragraphs.len());

  for node in paragraphs {
    let Some(link) = dom::select_one(&node, "a") else {
      warnings.push(format!("toc entry without link: {:?}", dom::trimmed_text(&node)));
      continue;
    };
    let Some(href) = dom::attr(&link, "href") else {
      warnings.push(format!("toc link without href: {:?}", dom::trimmed_text(&link)));
      continue;
    };

    let mut kind = EntryKind::from_classes(&dom::classes(&link));
    if kind == EntryKind::HomeLink {
      node.detach();
      continue;
    }

    let Some((filename, fragment)) = href.split_once('#') else {
      warnings.push(format!("toc link without fragment, dropped: {href}"));
      node.detach();
      continue;
    };
    let page = filename.replace(".html", "");
    dom::set_attr(&link, "href", &page);
    strip_number_marker(&link);
    shorten_long_label(&link);

    if page == options.intro_href {
      dom::add_class(&link, "linkintro");
      kind = EntryKind::Intro;
    } else if let EntryKind::Unknown(classes) = &kind {
      warnings.push(format!("unknown toc entry class {classes:?} on {href}"));
    }

    entries.push(TocEntry {
      node,
      link,
      href: page,
      key: EntryKey { kind, fragment: fragment.to_string() },
    });
  }

  TocEntries { entries }
}

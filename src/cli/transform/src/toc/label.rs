/* src/cli/transform/src/toc/label.rs */

// Display-text cleanup for sidebar links. lwarp writes a label as
// `<number><separator><label...>`; the sidebar only keeps the label.

use kuchiki::NodeRef;

use crate::dom;

const EM_SPACE: char = '\u{2003}';
const LONG_LABEL_TAIL: &str = " Zeichenprogramm";
const SHORT_LABEL: &str = "kZ ist kein Zeichenprogramm";

fn is_separator(node: &NodeRef) -> bool {
  if let Some(text) = node.as_text() {
    return text.borrow().contains(EM_SPACE);
  }
  dom::has_class(node, "quad")
}

/// A leading element that holds the number, e.g.
/// `<span class="sectionnumber">I&#x2003;</span>`.
fn is_number_wrapper(node: &NodeRef) -> bool {
  node.as_element().is_some()
    && (dom::has_class(node, "sectionnumber") || node.text_contents().contains(EM_SPACE))
}

/// Drop the leading number marker and its separator from a link label.
/// Labels without a separator are left alone.
pub(super) fn strip_number_marker(link: &NodeRef) {
  if let Some(first) = link.children().find(|c| !dom::is_ignorable(c))
    && is_number_wrapper(&first)
  {
    let held_separator = first.text_contents().contains(EM_SPACE);
    first.detach();
    if held_separator {
      return;
    }
  }

  let children: Vec<NodeRef> = link.children().collect();
  let Some(pos) = children.iter().position(is_separator) else {
    return;
  };
  for node in &children[..pos] {
    node.detach();
  }
  let separator = &children[pos];
  match separator.as_text() {
    Some(text) => {
      let rest = text.borrow().split_once(EM_SPACE).map(|(_, r)| r.to_string()).unwrap_or_default();
      if rest.trim().is_empty() {
        separator.detach();
      } else {
        *text.borrow_mut() = rest;
      }
    }
    None => separator.detach(),
  }
}

/// The German tutorial title wraps in the sidebar; collapse its italic
/// markup into one plain label.
pub(super) fn shorten_long_label(link: &NodeRef) {
  let children: Vec<NodeRef> = link.children().collect();
  if children.len() < 2 {
    return;
  }
  let ends_long = children
    .last()
    .and_then(|n| n.as_text())
    .is_some_and(|t| t.borrow().trim_end().ends_with(LONG_LABEL_TAIL));
  if !ends_long {
    return;
  }
  for node in &children[children.len() - 2..] {
    node.detach();
  }
  link.append(NodeRef::new_text(SHORT_LABEL));
}

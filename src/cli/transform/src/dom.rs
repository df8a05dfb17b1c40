/* src/cli/transform/src/dom.rs */

// Thin layer over the kuchiki tree. Passes go through these helpers so
// html5ever names never leak into the rest of the crate.

use anyhow::{Context, Result, anyhow};
use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;

/// Parse a complete HTML document.
pub fn parse(html: &str) -> NodeRef {
  kuchiki::parse_html().one(html)
}

/// Serialize a node (usually the document) back to HTML text.
pub fn serialize(node: &NodeRef) -> Result<String> {
  let mut out = Vec::new();
  node.serialize(&mut out).context("failed to serialize document")?;
  String::from_utf8(out).context("serialized document is not valid UTF-8")
}

/// Serialize the children of `node` without the node itself.
pub fn inner_html(node: &NodeRef) -> Result<String> {
  let mut html = String::new();
  for child in node.children() {
    html.push_str(&serialize(&child)?);
  }
  Ok(html)
}

/// Parse an HTML snippet and return its top-level nodes, detached and ready
/// to be inserted into another tree.
pub fn fragment(html: &str) -> Vec<NodeRef> {
  let doc = parse(&format!("<!DOCTYPE html><html><head></head><body>{html}</body></html>"));
  let Ok(body) = doc.select_first("body") else {
    return Vec::new();
  };
  let nodes: Vec<NodeRef> = body.as_node().children().collect();
  for node in &nodes {
    node.detach();
  }
  nodes
}

/// Like [`fragment`], but expects exactly one element at the top level.
pub fn element(html: &str) -> Result<NodeRef> {
  fragment(html)
    .into_iter()
    .find(|n| n.as_element().is_some())
    .with_context(|| format!("snippet has no element: {html}"))
}

/// All matches of `selector` in document order. Collected up front so
/// callers can mutate the tree while walking the result.
pub fn select_all(root: &NodeRef, selector: &str) -> Result<Vec<NodeRef>> {
  let matches = root.select(selector).map_err(|()| anyhow!("invalid selector {selector:?}"))?;
  Ok(matches.map(|m| m.as_node().clone()).collect())
}

pub fn select_one(root: &NodeRef, selector: &str) -> Option<NodeRef> {
  root.select_first(selector).ok().map(|m| m.as_node().clone())
}

pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
  node.as_element().is_some_and(|el| &*el.name.local == tag)
}

pub fn tag_name(node: &NodeRef) -> Option<String> {
  node.as_element().map(|el| el.name.local.to_string())
}

pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
  node.as_element()?.attributes.borrow().get(name).map(str::to_string)
}

pub fn set_attr(node: &NodeRef, name: &str, value: &str) {
  if let Some(el) = node.as_element() {
    el.attributes.borrow_mut().insert(name, value.to_string());
  }
}

pub fn classes(node: &NodeRef) -> Vec<String> {
  attr(node, "class")
    .map(|c| c.split_whitespace().map(str::to_string).collect())
    .unwrap_or_default()
}

pub fn has_class(node: &NodeRef, class: &str) -> bool {
  classes(node).iter().any(|c| c == class)
}

/// Append a class token, keeping existing ones.
pub fn add_class(node: &NodeRef, class: &str) {
  let mut tokens = classes(node);
  if tokens.iter().any(|c| c == class) {
    return;
  }
  tokens.push(class.to_string());
  set_attr(node, "class", &tokens.join(" "));
}

/// Whitespace-only text, or a comment. Both are invisible to sibling scans.
pub fn is_ignorable(node: &NodeRef) -> bool {
  if node.as_comment().is_some() {
    return true;
  }
  node.as_text().is_some_and(|t| t.borrow().trim().is_empty())
}

pub fn trimmed_text(node: &NodeRef) -> String {
  node.text_contents().trim().to_string()
}

pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

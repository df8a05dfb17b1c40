/* src/cli/transform/src/inject/mod.rs */

// Site chrome added to every page: header with search, footer, copy
// buttons on code examples. Also removes lwarp's own navigation bars.

mod mathjax;
mod svg;

pub use mathjax::{has_only_boilerplate_math, strip_mathjax};
pub use svg::{PT_TO_PX, parse_svg_size, size_svg_images};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use kuchiki::NodeRef;
use serde::Deserialize;

use crate::dom::{self, escape_html};

const DOCSEARCH_CSS: &str = "https://cdn.jsdelivr.net/npm/docsearch.js@2/dist/cdn/docsearch.min.css";
const DOCSEARCH_JS: &str = "https://cdn.jsdelivr.net/npm/docsearch.js@2/dist/cdn/docsearch.min.js";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
  pub api_key: String,
  pub index_name: String,
  pub app_id: String,
  pub input_selector: String,
}

impl Default for SearchOptions {
  fn default() -> Self {
    Self {
      api_key: "ae66ec3fc9df4b52b4d6f24fc8508fd3".to_string(),
      index_name: "tikz.dev".to_string(),
      app_id: "Q70NNMA9GC".to_string(),
      input_selector: ".search-input".to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FooterLink {
  pub label: String,
  pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
  /// Header title; trusted HTML.
  pub title_html: String,
  pub search: SearchOptions,
  pub footer_links: Vec<FooterLink>,
}

impl Default for SiteOptions {
  fn default() -> Self {
    let link = |label: &str, href: &str| FooterLink { label: label.into(), href: href.into() };
    Self {
      title_html: "PGF/Ti<i>k</i>Z Manual".to_string(),
      search: SearchOptions::default(),
      footer_links: vec![
        link("Home", "/"),
        link("Source", "https://github.com/pgf-tikz/pgf"),
        link("Issues", "https://github.com/pgf-tikz/pgf/issues"),
      ],
    }
  }
}

fn body(doc: &NodeRef) -> Result<NodeRef> {
  dom::select_one(doc, "body").context("document has no body")
}

/// Insert the site header at the top of `<body>` and wire up DocSearch.
pub fn add_header(doc: &NodeRef, site: &SiteOptions) -> Result<()> {
  let body = body(doc)?;
  let head = dom::select_one(doc, "head").context("document has no head")?;

  let header = dom::element(&format!(
    concat!(
      r#"<header><h1><a href="/">{title}</a></h1>"#,
      r#"<input type="search" placeholder="Search" class="search-input"></header>"#,
    ),
    title = site.title_html,
  ))?;
  body.prepend(header);

  head.append(dom::element(&format!(r#"<link rel="stylesheet" href="{DOCSEARCH_CSS}">"#))?);
  body.append(dom::element(&format!(r#"<script src="{DOCSEARCH_JS}"></script>"#))?);

  let search = &site.search;
  let init = format!(
    concat!(
      "\n      docsearch({{\n",
      "        apiKey: {api_key},\n",
      "        indexName: {index_name},\n",
      "        appId: {app_id},\n",
      "        inputSelector: {input_selector},\n",
      "        debug: false,\n",
      "      }});\n    ",
    ),
    api_key = serde_json::to_string(&search.api_key)?,
    index_name = serde_json::to_string(&search.index_name)?,
    app_id = serde_json::to_string(&search.app_id)?,
    input_selector = serde_json::to_string(&search.input_selector)?,
  );
  let script = dom::element("<script></script>")?;
  script.append(NodeRef::new_text(init));
  body.append(script);
  Ok(())
}

/// Append the footer with fixed links and the build date.
pub fn add_footer(doc: &NodeRef, site: &SiteOptions, built: NaiveDate) -> Result<()> {
  let links: String = site
    .footer_links
    .iter()
    .map(|l| format!(r#"<a href="{}">{}</a>"#, escape_html(&l.href), escape_html(&l.label)))
    .collect();
  let footer = dom::element(&format!(
    concat!(
      r#"<footer class="site-footer"><nav>{links}</nav>"#,
      r#"<p class="last-updated">Last updated: {date}</p></footer>"#,
    ),
    links = links,
    date = built.format("%Y-%m-%d"),
  ))?;
  body(doc)?.append(footer);
  Ok(())
}

/// Prepend a copy button to every code example. Returns how many were added.
pub fn add_clipboard_buttons(doc: &NodeRef) -> Result<usize> {
  let examples = dom::select_all(doc, ".codeexample")?;
  for example in &examples {
    example.prepend(dom::element(concat!(
      r#"<button class="clipboard-button" type="button" title="Copy to clipboard">"#,
      "Copy</button>",
    ))?);
  }
  Ok(examples.len())
}

/// Remove lwarp's top and bottom navigation bars.
pub fn remove_navigation(doc: &NodeRef) -> Result<()> {
  for class in ["topnavigation", "botnavigation"] {
    dom::select_one(doc, &format!(".{class}"))
      .with_context(|| format!("page has no .{class}"))?
      .detach();
  }
  Ok(())
}

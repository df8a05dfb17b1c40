/* src/cli/transform/src/inject/mathjax.rs */

use anyhow::{Context, Result};
use kuchiki::NodeRef;

use crate::dom;

/// lwarp's own preamble contributes this many `\(` delimiters to every page.
const BOILERPLATE_MATH_DELIMITERS: usize = 61;
const EMULATION_MARKER: &str = "Lwarp MathJax emulation code";

/// True when the raw page text contains no math beyond the generator's
/// boilerplate, so MathJax can be dropped.
pub fn has_only_boilerplate_math(raw: &str) -> bool {
  raw.matches("\\(").count() == BOILERPLATE_MATH_DELIMITERS
}

/// Remove the MathJax loader, its hidden macro block and the emulation
/// scripts. Returns the number of nodes removed.
pub fn strip_mathjax(doc: &NodeRef) -> Result<usize> {
  let hidden = dom::select_one(doc, ".hidden").context("math-free page has no .hidden block")?;
  let loader =
    dom::select_one(doc, "#MathJax-script").context("math-free page has no #MathJax-script")?;
  hidden.detach();
  loader.detach();

  let mut removed = 2;
  for script in dom::select_all(doc, "script")? {
    if script.text_contents().contains(EMULATION_MARKER) {
      script.detach();
      removed += 1;
    }
  }
  Ok(removed)
}

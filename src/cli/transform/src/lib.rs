/* src/cli/transform/src/lib.rs */

pub mod anchors;
pub mod dom;
pub mod inject;
pub mod links;
pub mod normalize;
pub mod toc;

mod pipeline;

pub use anchors::AnchorOptions;
pub use inject::{FooterLink, SearchOptions, SiteOptions};
pub use pipeline::{Page, Rendered, TransformOptions, render_page};
pub use toc::TocOptions;

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  // -- Integration tests spanning multiple passes --

  const FIGURE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15pt" height="6pt"></svg>"#;

  fn section_page() -> String {
    let boilerplate = "\\(\\)".repeat(61);
    format!(
      concat!(
        "<!DOCTYPE html>\n<html><head><title>Nodes</title>\n",
        r#"<script id="MathJax-script" src="mathjax/tex-chtml.js"></script>"#,
        "\n<script>// Lwarp MathJax emulation code</script>\n",
        "</head><body>\n",
        r#"<div class="hidden">{boilerplate}</div>"#,
        "\n",
        r#"<div class="topnavigation"><a href="index.html">Home</a></div>"#,
        r#"<div class="bodyandsidetoc"><div class="sidetoccontainer"><nav class="sidetoc">"#,
        r#"<div class="sidetoccontents">"#,
        r#"<p><a href="index.html" class="linkhome">Home</a></p>"#,
        r#"<p><a href="index-0.html#autosec-7" class="tocsection">Introduction</a></p>"#,
        r#"<p><a href="pgfmanual-en-tutorials.html#autosec-10" class="tocpart">I&#x2003;Tutorials</a></p>"#,
        r#"<p><a href="pgfmanual-en-tutorial.html#autosec-11" class="tocsection">1&#x2003;Karl</a></p>"#,
        r#"<p><a href="pgfmanual-en-tikz.html#autosec-20" class="tocpart">III&#x2003;Ti<i>k</i>Z</a></p>"#,
        r#"<p><a href="pgfmanual-en-tikz-shapes.html#autosec-21" class="tocsection">12&#x2003;Nodes</a></p>"#,
        r#"<p><a href="pgfmanual-en-tikz-paths.html#autosec-22" class="tocsection">13&#x2003;Paths</a></p>"#,
        "</div></nav></div>\n",
        "<main><h1>PGF/TikZ Manual</h1>\n",
        r#"<h4 id="autosec-21">Nodes</h4>"#,
        "\n",
        r#"<h5 id="pgfmanual-auto-30">Shapes</h5>"#,
        "\n",
        r#"<a id="pgfmanual-auto-31"></a><a id="sec-shapes"></a>"#,
        r#"<div class="entryheadline"><p><a id="pgf.node"></a><code>\node</code></p></div>"#,
        r#"<div class="codeexample"><pre>\node {{x}};</pre></div>"#,
        r#"<img src="pgfmanual-images/fig-1.svg" alt="figure">"#,
        r#"<p>See <a href="pgfmanual-en-tikz-paths.html#sec-paths">paths</a>.</p>"#,
        "</main></div>\n",
        r#"<div class="botnavigation">bottom</div>"#,
        "\n</body></html>\n",
      ),
      boilerplate = boilerplate,
    )
  }

  fn render(raw: &str, landing: bool) -> Rendered {
    let page = Page { raw, landing, build_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap() };
    render_page(page, &TransformOptions::default(), |src| {
      (src == "pgfmanual-images/fig-1.svg").then(|| FIGURE.to_string())
    })
    .unwrap()
  }

  #[test]
  fn full_section_page() {
    let raw = section_page();
    let out = render(&raw, false);
    assert!(out.warnings.is_empty(), "{:?}", out.warnings);
    let html = &out.html;

    // Sidebar reduced to the current part, current entry marked. Attributes
    // serialize in name order.
    assert!(html.contains(r#"<p class="current current-part"><a class="tocsection" href="pgfmanual-en-tikz-shapes">"#));
    assert!(!html.contains("Karl"));
    assert!(html.contains(r#"class="tocsection linkintro" href="index-0""#));

    // Part heading repeated under the title.
    assert!(html.contains(r#"<h2 class="inserted">Ti<i>k</i>Z</h2>"#));

    // Local toc lists the subheading; its human anchor moved inside.
    assert!(html.contains(r##"<p class="toc-h5"><a href="#pgfmanual-auto-30">Shapes</a></p>"##));
    assert!(html.contains(r#"<h5 id="pgfmanual-auto-30"><a id="sec-shapes"></a>Shapes</h5>"#));

    // Math-free page drops MathJax.
    assert!(!html.contains("MathJax-script"));
    assert!(!html.contains("emulation code"));
    assert!(!html.contains(r#"class="hidden""#));

    assert!(html.contains(r##"<a class="anchor-link" href="#pgf.node">¶</a>"##));
    assert!(html.contains(r#"href="pgfmanual-en-tikz-paths#sec-paths""#));
    assert!(!html.contains("topnavigation"));
    assert!(!html.contains("botnavigation"));
    assert!(html.contains("clipboard-button"));
    assert!(html.contains(r#"width="20""#));
    assert!(html.contains(r#"height="8""#));

    let header = html.find("<header>").unwrap();
    let content = html.find("bodyandsidetoc").unwrap();
    assert!(header < content);
    assert!(html.contains("Last updated: 2025-06-01"));
  }

  #[test]
  fn page_with_math_keeps_mathjax() {
    let raw = section_page().replace("<p>See", "<p>\\(x^2\\) See");
    let out = render(&raw, false);
    assert!(out.html.contains("MathJax-script"));
    assert!(out.html.contains(r#"class="hidden""#));
  }

  #[test]
  fn landing_page_links_lose_fragments() {
    let raw = section_page();
    let out = render(&raw, true);
    assert!(out.html.contains(r#"href="pgfmanual-en-tikz-paths""#));
    assert!(!out.html.contains("#sec-paths"));
    assert!(!out.html.contains("local-toc-container"));
    assert!(out.html.contains("topnavigation"));
  }
}

/* src/cli/transform/src/normalize.rs */

use std::sync::OnceLock;

use regex::Regex;

fn spaces_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r" {2,}").unwrap())
}

/// Collapse runs of spaces inside each line while keeping the line's
/// indentation width. Leading tabs count as one space each.
pub fn normalize_whitespace(html: &str) -> String {
  html
    .split('\n')
    .map(|line| {
      let indent = line.len() - line.trim_start().len();
      let indent = line[..indent].chars().count();
      let body = spaces_re().replace_all(line.trim(), " ");
      format!("{}{body}", " ".repeat(indent))
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/* src/cli/core/src/config/tests/validation.rs */

use super::*;

fn parse(toml_str: &str) -> SiteConfig {
  toml::from_str(toml_str).unwrap()
}

#[test]
fn defaults_are_valid() {
  assert!(SiteConfig::default().validate().is_ok());
}

#[test]
fn empty_output_dir_rejected() {
  let err = parse("[output]\ndir = \"\"\n").validate().unwrap_err();
  assert!(err.to_string().contains("output.dir must not be empty"));
}

#[test]
fn output_equal_to_input_rejected() {
  let config = parse("[input]\ndir = \"./html/\"\n[output]\ndir = \"html\"\n");
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("must differ from input.dir"));
}

#[test]
fn output_dot_rejected_for_default_input() {
  assert!(parse("[output]\ndir = \"./\"\n").validate().is_err());
}

#[test]
fn excluded_landing_page_rejected() {
  let config = parse("[input]\nlanding_page = \"description.html\"\n");
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("listed in input.exclude"));
}

#[test]
fn invalid_file_reports_path() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join(CONFIG_FILE);
  std::fs::write(&path, "[output]\ndir = \".\"\n").unwrap();
  let err = load_site_config(&path).unwrap_err();
  assert!(format!("{err:#}").contains("must differ"));
  assert!(err.to_string().contains(CONFIG_FILE));
}

#[test]
fn malformed_toml_is_a_parse_error() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join(CONFIG_FILE);
  std::fs::write(&path, "[output\n").unwrap();
  let err = load_site_config(&path).unwrap_err();
  assert!(err.to_string().starts_with("failed to parse"));
}

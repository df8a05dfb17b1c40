/* src/cli/core/src/config/tests/mod.rs */

use super::loader::{CONFIG_FILE, find_site_config, load_site_config};
use super::*;

mod validation;

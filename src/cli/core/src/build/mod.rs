/* src/cli/core/src/build/mod.rs */

mod assets;
mod emit;
pub mod run;

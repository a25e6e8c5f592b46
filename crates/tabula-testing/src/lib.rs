//! Testing infrastructure for tabula integration tests.
//!
//! - `TestWorld`: isolated config directory plus dataset files, and a way
//!   to run the `tabula` binary against them
//! - `assertions`: checks over the JSON that `--format json` prints
//! - `fixtures`: sample datasets

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

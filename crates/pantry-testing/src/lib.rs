//! Testing infrastructure for pantry integration tests.
//!
//! - `TestWorld`: isolated data directory plus a configured `pantry` command
//! - `fixtures`: sample catalogs on disk and small in-code catalogs
//! - `assertions`: checks against `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

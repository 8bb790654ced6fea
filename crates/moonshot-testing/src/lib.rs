//! Testing infrastructure for moonshot integration tests.
//!
//! - `TestWorld`: isolated data directory, resource directory and CLI runner
//! - `fixtures`: catalog datasets written as the two JSON resources
//! - `assertions`: checks over the JSON output of the CLI

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::Dataset;
pub use world::{CliResult, TestWorld};

//! Testing infrastructure for gitln tests.
//!
//! - `fixtures`: builders for separator-delimited `git log` records
//! - `assertions`: escape-aware comparisons of rendered output
//! - `world`: isolated environment for driving the `git-ln` binary

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::LogLine;
pub use world::TestWorld;

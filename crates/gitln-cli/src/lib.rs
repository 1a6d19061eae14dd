// gitln: `git log --graph`, one compact line per commit
//
// The per-line work (splitting records, rendering fields) lives in
// gitln-engine and only ever sees one input stream and one output stream.
// This crate owns everything around it: arguments, config, logging, the
// `git log` child process and the pager.

mod args;
mod commands;
pub mod config;
pub mod git;
mod logging;
mod pager;
pub mod types;

pub use args::Cli;
pub use commands::run;

// Engine module - the per-line core of gitln
// Splits git's separator-delimited records and renders them for a terminal
// or a plain sink. Process orchestration lives in the CLI crate.

pub mod date;
mod palette;
pub mod pipeline;
pub mod refs;
pub mod render;
pub mod split;
pub mod verified;

pub use date::{abbreviate_date, abbreviate_relative, elapsed_label};
pub use pipeline::{RunStats, run};
pub use refs::{RefOptions, render_refs};
pub use render::{RenderOptions, Renderer};
pub use split::split;
pub use verified::VerifiedSet;

pub mod config;
pub mod error;
pub mod record;
pub mod separator;

pub use config::{Mode, RunConfig};
pub use error::{Error, Result};
pub use record::{Fields, Record};
pub use separator::Separator;

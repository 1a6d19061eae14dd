use crate::types::LogLevel;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics on stderr.
///
/// `RUST_LOG` takes precedence; otherwise the `--log-level` value applies.
/// stdout stays reserved for rendered lines.
pub fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Logging bootstrap.
//!
//! # Responsibility
//! - Route the `log` facade to stderr through `flexi_logger`.
//! - Keep diagnostics (`event=... key=value` lines) off stdout, which
//!   belongs to command output.
//!
//! # Invariants
//! - `RUST_LOG` wins over the configured level.
//! - Initialization never panics; failure is reported to the caller.

use crate::errors::{AppError, AppResult};
use flexi_logger::{Logger, LoggerHandle, WriteMode};

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

pub fn normalize_level(level: &str) -> AppResult<&'static str> {
    let lower = level.trim().to_ascii_lowercase();
    LEVELS
        .into_iter()
        .find(|l| *l == lower)
        .ok_or_else(|| AppError::Config(format!("unsupported log level `{level}`")))
}

/// Start the stderr logger. Keep the returned handle alive until exit.
pub fn init_logging(level: &str) -> AppResult<LoggerHandle> {
    let level = normalize_level(level)?;

    let handle = Logger::try_with_env_or_str(level)
        .map_err(|e| AppError::Config(format!("invalid log level `{level}`: {e}")))?
        .log_to_stderr()
        .format_for_stderr(flexi_logger::detailed_format)
        .write_mode(WriteMode::Direct)
        .start()
        .map_err(|e| AppError::Config(format!("failed to start logger: {e}")))?;

    log::debug!(
        "event=app_start module=core status=ok platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );

    Ok(handle)
}

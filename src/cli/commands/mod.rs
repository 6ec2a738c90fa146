pub mod alerts;
pub mod calendar;
pub mod config;
pub mod init;
pub mod log;
pub mod overdue;
pub mod report;
pub mod resident;
pub mod schedule;
pub mod shift;
pub mod staff;
pub mod stock;
pub mod task;
pub mod todo;
pub mod watch;

use crate::config::Config;
use crate::core::state::StateContainer;
use crate::db::log::ttlog;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::error;
use crate::utils::{date, time};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Open the configured store and load the full state from it.
pub(crate) fn open_state(cfg: &Config) -> AppResult<StateContainer<Store>> {
    Store::open(&cfg.database)?.into_container()
}

/// Parse `--date`, defaulting to today.
pub(crate) fn resolve_date(input: &Option<String>) -> AppResult<NaiveDate> {
    match input {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(date::today()),
    }
}

/// Parse `--at HH:MM` as a time today, defaulting to the current local time.
pub(crate) fn resolve_now(at: &Option<String>) -> AppResult<NaiveDateTime> {
    match at {
        Some(s) => {
            let t = time::parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
            Ok(date::today().and_time(t))
        }
        None => Ok(Local::now().naive_local()),
    }
}

/// Write to the internal log table; failures are reported but never abort
/// the command.
pub(crate) fn audit(store: &Store, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&store.pool().conn, operation, target, message) {
        ::log::warn!("event=audit status=error operation={operation} error={e}");
        error(format!("Failed to write internal log: {}", e));
    }
}

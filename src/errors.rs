//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid task category: {0}")]
    InvalidCategory(String),

    #[error("Invalid task priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid staff role: {0}")]
    InvalidRole(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No task with id {0}")]
    TaskNotFound(String),

    #[error("Task id already in use: {0}")]
    DuplicateTask(String),

    #[error("No staff member with id {0}")]
    StaffNotFound(String),

    #[error("Staff id already in use: {0}")]
    DuplicateStaff(String),

    #[error("No resident with id {0}")]
    ResidentNotFound(String),

    #[error("Resident id already in use: {0}")]
    DuplicateResident(String),

    #[error("No schedule entry with id {0}")]
    ScheduleNotFound(String),

    #[error("No stock item with id {0}")]
    StockItemNotFound(String),

    #[error("Stock item id already in use: {0}")]
    DuplicateStockItem(String),

    #[error("No incident report with id {0}")]
    ReportNotFound(String),

    #[error("No todo with id {0}")]
    TodoNotFound(String),

    #[error("Date out of calendar range: {0}")]
    DateOutOfRange(String),

    #[error("Monitor error: {0}")]
    Monitor(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;

//! Unified application error type.
//! Every layer (store, import, core, export, cli) returns AppError so that
//! `main` has a single place where failures are reported.

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

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid attendance status: {0} (expected Present, LWP, Sick, Vacation or Holiday)")]
    InvalidStatus(String),

    #[error("Invalid salary amount: {0}")]
    InvalidSalary(String),

    #[error("Invalid attendance entry: {0} (expected ID=STATUS)")]
    InvalidEntry(String),

    // ---------------------------
    // Roster / attendance logic
    // ---------------------------
    #[error("No employees loaded.")]
    EmptyRoster,

    #[error("Unknown employee id: {0}")]
    UnknownEmployee(String),

    #[error("No attendance data for {0}.")]
    NoDataForPeriod(String),

    #[error("No attendance record saved for {0}.")]
    NoRecordForDate(String),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("Roster import error: {0}")]
    Import(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type AppResult<T> = Result<T, AppError>;

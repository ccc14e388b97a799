//! Unified application error type.
//! All modules (store, core, cli, gui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Workbook-related
    // ---------------------------
    #[error("Workbook not found: {}", .0.display())]
    WorkbookNotFound(PathBuf),

    #[error("Spreadsheet read error: {0}")]
    SheetRead(#[from] calamine::XlsxError),

    #[error("Spreadsheet write error: {0}")]
    SheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Sheet #{index} not found (workbook has {count} sheets)")]
    MissingSheet { index: usize, count: usize },

    // ---------------------------
    // Catalog / session errors
    // ---------------------------
    #[error("Invalid calorie value at catalog row {row}: '{value}'")]
    InvalidCalories { row: usize, value: String },

    #[error("The food catalog is empty")]
    EmptyCatalog,

    #[error("Invalid selection {index}: catalog has {len} entries")]
    InvalidSelection { index: usize, len: usize },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // GUI
    // ---------------------------
    #[error("GUI error: {0}")]
    Gui(String),
}

pub type AppResult<T> = Result<T, AppError>;

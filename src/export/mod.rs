//! Export of the daily log to standalone csv / json / xlsx files.

mod csv;
mod excel_date;
mod fs_utils;
mod json;
pub mod logic;
mod model;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use logic::ExportLogic;
pub use model::{ExportReport, RecordExport};

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

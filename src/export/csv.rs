// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportReport, HEADERS, record_to_row};
use std::path::Path;

/// One line per day; calories rendered without float noise (`95`, `62.5`).
pub(crate) fn export_csv(report: &ExportReport, path: &Path) -> AppResult<()> {
    let csv_err = |e: ::csv::Error| AppError::Export(format!("CSV error: {e}"));

    let mut wtr = ::csv::Writer::from_path(path).map_err(csv_err)?;
    wtr.write_record(HEADERS).map_err(csv_err)?;

    for rec in &report.records {
        wtr.write_record(record_to_row(rec)).map_err(csv_err)?;
    }

    wtr.flush()?;
    Ok(())
}

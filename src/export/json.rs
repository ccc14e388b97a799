// src/export/json.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::ExportReport;
use std::fs;
use std::path::Path;

/// Pretty-printed report: period, day count, total, average, records.
pub(crate) fn export_json(report: &ExportReport, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    fs::write(path, json)?;
    Ok(())
}

// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::ExportReport;
use crate::export::xlsx::export_xlsx;
use crate::models::daily_record::DailyRecord;
use crate::store::records::RecordStore;
use crate::ui::messages::{success, warning};
use crate::utils::date::Period;
use crate::utils::formatting::render_number;
use std::path::Path;
use tracing::info;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export dei totali giornalieri.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: path assoluto del file di output
    /// - `period`: `None`, `"all"`, `YYYY`, `YYYY-MM` oppure `YYYY-MM-DD`
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        period: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let period = Period::from_arg(period)?;
        ensure_writable(path, force)?;

        let report = Self::collect(store, period)?;

        if report.records.is_empty() {
            warning(format!("No daily records found for period '{period}'."));
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&report, path)?,
            ExportFormat::Json => export_json(&report, path)?,
            ExportFormat::Xlsx => export_xlsx(&report, path)?,
        }

        info!(?format, path = %path.display(), days = report.days, "export written");
        success(format!(
            "Exported {} day(s), {} kcal, for period '{}' to {}",
            report.days,
            render_number(report.total_calories),
            report.period,
            path.display()
        ));
        Ok(())
    }

    /// Report over the log records inside `period`.
    pub fn collect(store: &RecordStore, period: Period) -> AppResult<ExportReport> {
        Ok(ExportReport::new(
            period,
            &filter_records(&store.load()?, period),
        ))
    }
}

pub fn filter_records(records: &[DailyRecord], period: Period) -> Vec<DailyRecord> {
    records
        .iter()
        .filter(|r| period.contains(r.date))
        .copied()
        .collect()
}

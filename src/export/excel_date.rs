// src/export/excel_date.rs

use chrono::NaiveDate;

/// Seriale Excel (sistema 1900) per una data di calendario.
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}

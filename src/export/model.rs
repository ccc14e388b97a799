// src/export/model.rs

use crate::models::daily_record::DailyRecord;
use crate::utils::date::Period;
use crate::utils::formatting::{display_stamp, render_number};
use serde::Serialize;

/// One daily total, flattened for export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub date: String,
    pub stamp: u32,
    pub calories: f64,
}

impl From<&DailyRecord> for RecordExport {
    fn from(r: &DailyRecord) -> Self {
        Self {
            date: display_stamp(r.date),
            stamp: r.date,
            calories: r.total,
        }
    }
}

/// Records of a period with their totals; the json export is this struct.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ExportReport {
    pub period: String,
    pub days: usize,
    pub total_calories: f64,
    pub average_calories: f64,
    pub records: Vec<RecordExport>,
}

impl ExportReport {
    pub fn new(period: Period, records: &[DailyRecord]) -> Self {
        let total_calories: f64 = records.iter().map(|r| r.total).sum();
        let days = records.len();
        let average_calories = if days == 0 {
            0.0
        } else {
            total_calories / days as f64
        };

        Self {
            period: period.to_string(),
            days,
            total_calories,
            average_calories,
            records: records.iter().map(RecordExport::from).collect(),
        }
    }
}

/// Column headers shared by csv and xlsx.
pub(crate) const HEADERS: [&str; 3] = ["date", "stamp", "calories"];

pub(crate) fn record_to_row(r: &RecordExport) -> [String; 3] {
    [r.date.clone(), r.stamp.to_string(), render_number(r.calories)]
}

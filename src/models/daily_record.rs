use serde::Serialize;

/// A persisted row of the log sheet: `(YYYYMMDD, total)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyRecord {
    /// Zero-based row index inside the log sheet
    #[serde(skip)]
    pub row: usize,
    pub date: u32,
    pub total: f64,
}

impl DailyRecord {
    pub fn new(row: usize, date: u32, total: f64) -> Self {
        Self { row, date, total }
    }
}

//! Daily log sheet: append or overwrite the `(date, total)` row.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::daily_record::DailyRecord;
use crate::store::workbook::{Cell, Sheet, Workbook};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DATE_COL: usize = 0;
pub const TOTAL_COL: usize = 1;

/// How a save lands in the log sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// New row after the last used one.
    Append,
    /// Rewrite the total of the last row, keeping its date cell.
    Overwrite,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveOutcome {
    pub mode: SaveMode,
    /// Zero-based row index that was written
    pub row: usize,
}

/// Location of the daily log: a workbook file and the index of its log sheet.
///
/// Every write reads the whole workbook and rewrites the whole file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    pub path: PathBuf,
    pub sheet: usize,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>, sheet: usize) -> Self {
        Self {
            path: path.into(),
            sheet,
        }
    }

    /// Log sheet of the configured workbook.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.workbook_path(), cfg.log_sheet)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `(date, total)` on the row after the last used one.
    pub fn append(&self, date: u32, total: f64) -> AppResult<SaveOutcome> {
        let mut wb = Workbook::open(&self.path)?;
        let outcome = append_row(wb.sheet_mut(self.sheet)?, date, total);

        wb.save(&self.path)?;
        info!(row = outcome.row, date, total, "daily record appended");
        Ok(outcome)
    }

    /// Update today's total in place.
    ///
    /// Only the total cell of the last row is rewritten, and only when that
    /// row's date cell holds `date`; otherwise (other day, empty sheet) a new
    /// row is appended, so an earlier day's record is never replaced.
    pub fn overwrite_last_total(&self, date: u32, total: f64) -> AppResult<SaveOutcome> {
        let mut wb = Workbook::open(&self.path)?;
        let sheet = wb.sheet_mut(self.sheet)?;

        let same_day = sheet
            .last_row()
            .filter(|&row| sheet.get(row, DATE_COL).as_number() == Some(date as f64));

        let outcome = match same_day {
            Some(row) => {
                sheet.set(row, TOTAL_COL, Cell::Number(total));
                SaveOutcome {
                    mode: SaveMode::Overwrite,
                    row,
                }
            }
            None => {
                warn!(date, "last log row is not from this day, appending instead");
                append_row(sheet, date, total)
            }
        };

        wb.save(&self.path)?;
        info!(row = outcome.row, mode = ?outcome.mode, total, "daily record saved");
        Ok(outcome)
    }

    /// All rows whose date and total cells are numeric, in sheet order.
    /// Header or free-text rows are skipped.
    pub fn load(&self) -> AppResult<Vec<DailyRecord>> {
        let wb = Workbook::open(&self.path)?;
        let sheet = wb.sheet(self.sheet)?;

        let records = (0..sheet.rows.len())
            .filter_map(|row| {
                let date = sheet.get(row, DATE_COL).as_number()?;
                let total = sheet.get(row, TOTAL_COL).as_number()?;
                (date >= 0.0).then(|| DailyRecord::new(row, date as u32, total))
            })
            .collect();

        Ok(records)
    }
}

fn append_row(sheet: &mut Sheet, date: u32, total: f64) -> SaveOutcome {
    let row = sheet.last_row().map_or(0, |last| last + 1);
    sheet.set(row, DATE_COL, Cell::Number(date as f64));
    sheet.set(row, TOTAL_COL, Cell::Number(total));

    SaveOutcome {
        mode: SaveMode::Append,
        row,
    }
}

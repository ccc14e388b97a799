//! Spreadsheet storage: whole-workbook load/rewrite plus the daily log sheet.

pub mod records;
pub mod workbook;

pub use records::{RecordStore, SaveMode, SaveOutcome};
pub use workbook::{Cell, Sheet, Workbook};

//! In-memory workbook model.
//!
//! A workbook is read entirely with calamine, edited in memory and written back
//! with rust_xlsxwriter. Values, formulas (with their cached result) and date
//! cells survive a rewrite; styles and column widths do not.

use crate::errors::{AppError, AppResult};
use crate::utils::formatting::render_number;
use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::{Format, Formula};
use std::path::Path;
use tracing::debug;

/// Number format used when writing `Cell::Date` back.
const DATE_FORMAT: &str = "yyyy-mm-dd";

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    /// Excel serial date.
    Date(f64),
    /// Error value kept as its text (`#DIV/0!`, `#N/A`, ...).
    Error(String),
    /// Formula without the leading `=`, plus the last computed value.
    Formula { formula: String, cached: Box<Cell> },
}

impl Cell {
    pub fn formula(formula: impl Into<String>, cached: Cell) -> Self {
        Cell::Formula {
            formula: formula.into(),
            cached: Box::new(cached),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Numeric value; formulas answer with their cached result.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) | Cell::Date(n) => Some(*n),
            Cell::Formula { cached, .. } => cached.as_number(),
            _ => None,
        }
    }

    /// Textual form of the cell; numbers render without float artifacts.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) | Cell::Date(n) => render_number(*n),
            Cell::Text(s) | Cell::Error(s) => s.clone(),
            Cell::Bool(b) => b.to_string(),
            Cell::Formula { cached, .. } => cached.to_text(),
        }
    }
}

impl From<&Data> for Cell {
    fn from(d: &Data) -> Self {
        match d {
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::String(s) => Cell::Text(s.clone()),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Date(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Error(e.to_string()),
            Data::Empty => Cell::Empty,
        }
    }
}

/// A named grid of cells, addressed by zero-based (row, col).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Set a cell, growing the grid as needed.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let r = &mut self.rows[row];
        if r.len() <= col {
            r.resize(col + 1, Cell::Empty);
        }
        r[col] = cell;
    }

    /// Index of the last row holding at least one non-empty cell.
    pub fn last_row(&self) -> Option<usize> {
        self.rows
            .iter()
            .rposition(|r| r.iter().any(|c| !c.is_empty()))
    }

    pub fn row_is_empty(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_none_or(|r| r.iter().all(Cell::is_empty))
    }
}

/// Every sheet of an `.xlsx` file, in workbook order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Read the whole workbook from disk.
    pub fn open(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::WorkbookNotFound(path.to_path_buf()));
        }

        let mut xlsx: Xlsx<_> = open_workbook(path)?;
        let mut sheets = Vec::new();

        for name in xlsx.sheet_names() {
            let range = xlsx.worksheet_range(&name)?;
            let formulas = xlsx.worksheet_formula(&name)?;
            let mut sheet = Sheet::new(name);

            // calamine ranges start at the first used cell: keep absolute positions
            if let Some((last_row, last_col)) = range.end() {
                for r in 0..=last_row {
                    for c in 0..=last_col {
                        if let Some(d) = range.get_value((r, c)) {
                            let cell = Cell::from(d);
                            if !cell.is_empty() {
                                sheet.set(r as usize, c as usize, cell);
                            }
                        }
                    }
                }
            }

            if let Some((last_row, last_col)) = formulas.end() {
                for r in 0..=last_row {
                    for c in 0..=last_col {
                        let Some(f) = formulas.get_value((r, c)).filter(|f| !f.is_empty()) else {
                            continue;
                        };
                        let cached = sheet.get(r as usize, c as usize).clone();
                        sheet.set(r as usize, c as usize, Cell::formula(f.as_str(), cached));
                    }
                }
            }

            debug!(sheet = %sheet.name, rows = sheet.rows.len(), "sheet loaded");
            sheets.push(sheet);
        }

        Ok(Self { sheets })
    }

    /// Rewrite the whole file with the in-memory contents.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let mut wb = rust_xlsxwriter::Workbook::new();
        let date_format = Format::new().set_num_format(DATE_FORMAT);

        for sheet in &self.sheets {
            let ws = wb.add_worksheet();
            ws.set_name(&sheet.name)?;

            for (r, row) in sheet.rows.iter().enumerate() {
                for (c, cell) in row.iter().enumerate() {
                    write_cell(ws, r as u32, c as u16, cell, &date_format)?;
                }
            }
        }

        wb.save(path)?;
        debug!(path = %path.display(), sheets = self.sheets.len(), "workbook written");
        Ok(())
    }

    pub fn sheet(&self, index: usize) -> AppResult<&Sheet> {
        let count = self.sheets.len();
        self.sheets
            .get(index)
            .ok_or(AppError::MissingSheet { index, count })
    }

    pub fn sheet_mut(&mut self, index: usize) -> AppResult<&mut Sheet> {
        let count = self.sheets.len();
        self.sheets
            .get_mut(index)
            .ok_or(AppError::MissingSheet { index, count })
    }
}

fn write_cell(
    ws: &mut rust_xlsxwriter::Worksheet,
    r: u32,
    c: u16,
    cell: &Cell,
    date_format: &Format,
) -> AppResult<()> {
    match cell {
        Cell::Empty => {}
        Cell::Number(n) => {
            ws.write_number(r, c, *n)?;
        }
        Cell::Text(s) | Cell::Error(s) => {
            ws.write_string(r, c, s)?;
        }
        Cell::Bool(b) => {
            ws.write_boolean(r, c, *b)?;
        }
        Cell::Date(n) => {
            ws.write_number_with_format(r, c, *n, date_format)?;
        }
        Cell::Formula { formula, cached } => {
            let mut f = Formula::new(formula.as_str());
            match cached.as_ref() {
                Cell::Empty => {}
                Cell::Bool(b) => f = f.set_result(if *b { "TRUE" } else { "FALSE" }),
                other => f = f.set_result(other.to_text()),
            }
            ws.write_formula(r, c, f)?;
        }
    }
    Ok(())
}

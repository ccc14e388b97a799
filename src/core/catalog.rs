//! Food catalog loaded once at startup from the catalog sheet.

use crate::errors::{AppError, AppResult};
use crate::models::food_entry::FoodEntry;
use crate::store::workbook::{Cell, Sheet, Workbook};
use std::path::Path;
use tracing::info;

const FOOD_COL: usize = 0;
const SERVING_COL: usize = 1;
const CALORIES_COL: usize = 2;

/// Immutable list of selectable foods, in catalog row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<FoodEntry>,
    labels: Vec<String>,
}

impl Catalog {
    pub fn new(entries: Vec<FoodEntry>) -> Self {
        let labels = entries.iter().map(FoodEntry::label).collect();
        Self { entries, labels }
    }

    /// Read the catalog sheet of a workbook file.
    pub fn load(path: &Path, sheet_index: usize) -> AppResult<Self> {
        let wb = Workbook::open(path)?;
        let catalog = Self::from_sheet(wb.sheet(sheet_index)?)?;

        info!(
            path = %path.display(),
            sheet = sheet_index,
            entries = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Build the catalog from a three-column sheet (food, serving, calories).
    /// Fully empty rows are skipped; any other row needs a numeric calorie cell.
    pub fn from_sheet(sheet: &Sheet) -> AppResult<Self> {
        let mut entries = Vec::new();

        for row in 0..sheet.rows.len() {
            if sheet.row_is_empty(row) {
                continue;
            }

            let calories = parse_calories(sheet.get(row, CALORIES_COL)).ok_or_else(|| {
                AppError::InvalidCalories {
                    row: row + 1,
                    value: sheet.get(row, CALORIES_COL).to_text(),
                }
            })?;

            entries.push(FoodEntry::new(
                sheet.get(row, FOOD_COL).to_text(),
                sheet.get(row, SERVING_COL).to_text(),
                calories,
            ));
        }

        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    /// Dropdown labels, one per entry, same order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, index: usize) -> Option<&FoodEntry> {
        self.entries.get(index)
    }

    pub fn calories_at(&self, index: usize) -> AppResult<f64> {
        self.get(index)
            .map(|e| e.calories)
            .ok_or(AppError::InvalidSelection {
                index,
                len: self.len(),
            })
    }
}

fn parse_calories(cell: &Cell) -> Option<f64> {
    if let Some(n) = cell.as_number() {
        return Some(n);
    }
    match cell {
        Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

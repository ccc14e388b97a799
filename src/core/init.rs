use crate::errors::AppResult;
use crate::store::workbook::{Cell, Sheet, Workbook};
use std::fs;
use std::path::Path;
use tracing::info;

/// Foods written into a fresh catalog sheet.
const STARTER_FOODS: &[(&str, &str, f64)] = &[
    ("Apple", "1 medium", 95.0),
    ("Banana", "1 medium", 105.0),
    ("Egg", "1 large", 72.0),
    ("Bread", "1 slice", 79.0),
    ("Milk", "1 cup", 103.0),
    ("Rice", "1 cup cooked", 206.0),
    ("Chicken breast", "100 g", 165.0),
];

pub struct InitLogic;

impl InitLogic {
    /// Starter workbook: sheet 0 = catalog (no header), sheet 1 = daily log.
    pub fn starter_workbook() -> Workbook {
        let mut catalog = Sheet::new("Catalog");
        for (row, (food, serving, kcal)) in STARTER_FOODS.iter().enumerate() {
            catalog.set(row, 0, Cell::Text(food.to_string()));
            catalog.set(row, 1, Cell::Text(serving.to_string()));
            catalog.set(row, 2, Cell::Number(*kcal));
        }

        let mut log = Sheet::new("Log");
        log.set(0, 0, Cell::Text("Date".into()));
        log.set(0, 1, Cell::Text("Calories".into()));

        Workbook {
            sheets: vec![catalog, log],
        }
    }

    /// Write the starter workbook, creating parent directories.
    pub fn create_workbook(path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Self::starter_workbook().save(path)?;
        info!(path = %path.display(), "starter workbook created");
        Ok(())
    }
}

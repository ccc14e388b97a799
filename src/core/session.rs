//! Session controller: running total, current selection and save.

use crate::config::Config;
use crate::core::catalog::Catalog;
use crate::errors::{AppError, AppResult};
use crate::store::records::{RecordStore, SaveMode, SaveOutcome};
use crate::utils::date::today_stamp;
use crate::utils::formatting::display_total;
use tracing::{debug, info};

/// State owned by one run of the program.
///
/// The date stamp is fixed at construction and is not refreshed across midnight.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    selected: usize,
    selected_calories: f64,
    running_total: f64,
    date_stamp: u32,
    overwrite: bool,
}

impl Session {
    /// Start a session on `date_stamp` with the first entry selected.
    pub fn new(catalog: Catalog, date_stamp: u32) -> AppResult<Self> {
        let selected_calories = catalog.calories_at(0).map_err(|_| AppError::EmptyCatalog)?;

        Ok(Self {
            catalog,
            selected: 0,
            selected_calories,
            running_total: 0.0,
            date_stamp,
            overwrite: false,
        })
    }

    /// Session stamped with today's local date.
    pub fn for_today(catalog: Catalog) -> AppResult<Self> {
        Self::new(catalog, today_stamp())
    }

    /// Load the configured catalog and start today's session.
    /// Any catalog failure is fatal for the caller.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let catalog = Catalog::load(&cfg.catalog_path(), cfg.catalog_sheet)?;
        Self::for_today(catalog)
    }

    /// Start with the overwrite flag set: saves update the last log row when
    /// it carries this session's date stamp, and append otherwise.
    ///
    /// Nothing inside a session ever raises this flag on its own, so every save
    /// of a plain run appends, even after a previous run on the same day.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Dropdown change.
    pub fn select(&mut self, index: usize) -> AppResult<f64> {
        self.selected_calories = self.catalog.calories_at(index)?;
        self.selected = index;
        debug!(index, calories = self.selected_calories, "selection changed");
        Ok(self.selected_calories)
    }

    /// Add the selected calories to the running total and return it.
    pub fn add(&mut self) -> f64 {
        self.running_total += self.selected_calories;
        self.running_total
    }

    pub fn clear(&mut self) {
        self.running_total = 0.0;
    }

    /// Persist `(date, total)`; the running total is kept afterwards.
    /// The returned mode is the one actually applied.
    pub fn save(&self, store: &RecordStore) -> AppResult<SaveOutcome> {
        info!(
            mode = ?self.save_mode(),
            date = self.date_stamp,
            total = self.running_total,
            "saving daily total"
        );

        match self.save_mode() {
            SaveMode::Append => store.append(self.date_stamp, self.running_total),
            SaveMode::Overwrite => store.overwrite_last_total(self.date_stamp, self.running_total),
        }
    }

    pub fn save_mode(&self) -> SaveMode {
        if self.overwrite {
            SaveMode::Overwrite
        } else {
            SaveMode::Append
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_calories(&self) -> f64 {
        self.selected_calories
    }

    pub fn running_total(&self) -> f64 {
        self.running_total
    }

    pub fn date_stamp(&self) -> u32 {
        self.date_stamp
    }

    /// Text for the total field.
    pub fn display(&self) -> String {
        display_total(self.running_total)
    }
}

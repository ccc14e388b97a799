//! Desktop window: total display, food dropdown and Add / Save / Clear.

pub mod app;

pub use app::CalorieApp;

use crate::errors::{AppError, AppResult};

/// Open the window and block until it is closed.
pub fn run(app: CalorieApp, title: &str) -> AppResult<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([400.0, 300.0])
            .with_min_inner_size([320.0, 160.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(title, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| AppError::Gui(e.to_string()))
}

use crate::core::session::Session;
use crate::store::records::{RecordStore, SaveOutcome};
use eframe::egui;
use tracing::error;

/// Window state: the session plus where saves go.
///
/// Each handler is a state transition on the session; the next frame
/// redraws the display from it.
pub struct CalorieApp {
    session: Session,
    store: RecordStore,
    selected: usize,
}

impl CalorieApp {
    pub fn new(session: Session, store: RecordStore) -> Self {
        let selected = session.selected_index();
        Self {
            session,
            store,
            selected,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Text of the read-only total field.
    pub fn display(&self) -> String {
        self.session.display()
    }

    pub fn on_select(&mut self, index: usize) {
        match self.session.select(index) {
            Ok(_) => self.selected = index,
            Err(e) => error!("selection rejected: {e}"),
        }
    }

    pub fn on_add(&mut self) {
        self.session.add();
    }

    pub fn on_clear(&mut self) {
        self.session.clear();
    }

    /// Save errors are only logged; the total stays so the user can retry.
    pub fn on_save(&mut self) -> Option<SaveOutcome> {
        match self.session.save(&self.store) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(path = %self.store.path().display(), "save failed: {e}");
                None
            }
        }
    }

    fn food_combo(&mut self, ui: &mut egui::Ui) {
        let labels = self.session.catalog().labels();
        let current = labels.get(self.selected).cloned().unwrap_or_default();
        let mut picked = self.selected;

        egui::ComboBox::from_id_salt("food_combo")
            .selected_text(current)
            .show_ui(ui, |ui| {
                for (i, label) in labels.iter().enumerate() {
                    ui.selectable_value(&mut picked, i, label.as_str());
                }
            });

        if picked != self.selected {
            self.on_select(picked);
        }
    }
}

impl eframe::App for CalorieApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label("Calories:");

                let mut shown = self.display();
                ui.add(
                    egui::TextEdit::singleline(&mut shown)
                        .interactive(false)
                        .desired_width(60.0),
                );

                self.food_combo(ui);

                if ui.button("Add").clicked() {
                    self.on_add();
                }
                if ui.button("Save").clicked() {
                    self.on_save();
                }
                if ui.button("Clear").clicked() {
                    self.on_clear();
                }
            });
        });
    }
}

use serde::Serialize;

/// One selectable food of the catalog.
///
/// Identity is the row position in the catalog sheet: lookups go through the
/// index, never through the name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodEntry {
    pub name: String,
    pub serving: String,
    pub calories: f64,
}

impl FoodEntry {
    pub fn new(name: impl Into<String>, serving: impl Into<String>, calories: f64) -> Self {
        Self {
            name: name.into(),
            serving: serving.into(),
            calories,
        }
    }

    /// Dropdown label: `"{food} ({serving})"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.serving)
    }
}

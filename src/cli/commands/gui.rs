use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::gui::{self, CalorieApp};
use crate::store::records::RecordStore;

/// Open the desktop window on today's session.
pub fn handle(cfg: &Config) -> AppResult<()> {
    // catalog errors abort here, before any window is shown
    let session = Session::from_config(cfg)?;
    let store = RecordStore::from_config(cfg);

    gui::run(CalorieApp::new(session, store), &cfg.window_title)
}

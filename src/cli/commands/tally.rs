use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::store::records::{RecordStore, SaveMode};
use crate::ui::messages::{info, success};
use crate::utils::formatting::{display_stamp, display_total};

/// Scripted session: select + Add for each index, then optionally Save.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tally {
        items,
        save,
        overwrite,
    } = cmd
    {
        let mut session = Session::from_config(cfg)?.with_overwrite(*overwrite);

        for &index in items {
            let kcal = session.select(index)?;
            let total = session.add();
            info(format!(
                "{} +{} → {}",
                session.catalog().labels()[index],
                display_total(kcal),
                display_total(total)
            ));
        }

        println!("Total: {}", session.display());

        if *save {
            let store = RecordStore::from_config(cfg);
            let outcome = session.save(&store)?;
            let verb = match outcome.mode {
                SaveMode::Append => "appended",
                SaveMode::Overwrite => "updated",
            };
            success(format!(
                "{} {} for {} (row {})",
                verb,
                session.display(),
                display_stamp(session.date_stamp()),
                outcome.row + 1
            ));
        }
    }

    Ok(())
}

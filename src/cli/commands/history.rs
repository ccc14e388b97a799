use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::records::RecordStore;
use crate::ui::messages::{info, warning};
use crate::utils::date::Period;
use crate::utils::formatting::{display_total, render_number};
use crate::utils::table::Table;

/// Print the daily records of the log sheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { period } = cmd {
        let period = Period::from_arg(period.as_deref())?;
        let store = RecordStore::from_config(cfg);
        let report = ExportLogic::collect(&store, period)?;

        if report.records.is_empty() {
            warning("No daily records found.");
            return Ok(());
        }

        let mut table = Table::new(&["Date", "Stamp", "Calories"]);
        for r in &report.records {
            table.add_row(vec![
                r.date.clone(),
                r.stamp.to_string(),
                display_total(r.calories),
            ]);
        }

        print!("{}", table.render());
        info(format!(
            "{} day(s), total {} kcal, average {} kcal",
            report.days,
            render_number(report.total_calories),
            render_number(report.average_calories.round())
        ));
    }

    Ok(())
}

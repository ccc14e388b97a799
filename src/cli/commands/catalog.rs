use crate::config::Config;
use crate::core::catalog::Catalog;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::formatting::render_number;
use crate::utils::table::Table;

/// Print the catalog: index, dropdown label, calories.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let catalog = Catalog::load(&cfg.catalog_path(), cfg.catalog_sheet)?;

    if catalog.is_empty() {
        warning("The food catalog is empty.");
        return Ok(());
    }

    let mut table = Table::new(&["#", "Food", "Calories"]);
    for (i, (label, entry)) in catalog.labels().iter().zip(catalog.entries()).enumerate() {
        table.add_row(vec![
            i.to_string(),
            label.clone(),
            render_number(entry.calories),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

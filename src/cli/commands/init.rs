use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::init::InitLogic;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - a starter workbook with a catalog sheet and a log sheet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(Commands::Init { force }) = &cli.command {
        //
        // 1️⃣ CONFIGURAZIONE
        //
        if !cli.test {
            let path = cfg.save()?;
            success(format!("Config file: {}", path.display()));
        }

        //
        // 2️⃣ WORKBOOK
        //
        let workbook = cfg.workbook_path();
        ensure_writable(&workbook, *force)?;
        InitLogic::create_workbook(&workbook)?;

        success(format!("Workbook:    {}", workbook.display()));
    }

    Ok(())
}

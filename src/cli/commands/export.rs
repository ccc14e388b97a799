use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::records::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let store = RecordStore::from_config(cfg);
        ExportLogic::export(&store, *format, file, period.as_deref(), *force)?;
    }
    Ok(())
}

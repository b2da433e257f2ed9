use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        kind,
        period,
        format,
        file,
        force,
    } = cmd
    {
        ExportLogic::export(cfg, *kind, period, *format, file.as_deref(), *force)?;
    }
    Ok(())
}

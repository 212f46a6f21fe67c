use super::parse_status;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        status,
        force,
    } = cmd
    {
        let status = match status {
            Some(code) => Some(parse_status(code)?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, format, file, status, *force)?;
    }
    Ok(())
}

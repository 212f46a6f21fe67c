use super::parse_status;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::mirror::Mirror;

/// Add a work site.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        status,
        assign,
    } = cmd
    {
        //
        // 1. Parse target column (optional, defaults to todo)
        //
        let status = match status {
            Some(code) => Some(parse_status(code)?),
            None => None,
        };

        //
        // 2. Open DB and mirror
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let mut mirror = Mirror::load(&cfg.mirror);

        //
        // 3. Execute logic
        //
        AddLogic::apply(&mut pool, cfg, &mut mirror, name, status, assign.clone())?;
    }

    Ok(())
}

use super::parse_status;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::board::{BoardLogic, MoveLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::mirror::Mirror;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::Board => BoardLogic::render(&mut pool, cfg),

        Commands::Move { id, column, at } => {
            let target = parse_status(column)?;
            // CLI positions are 1-based; the reducer indexes from 0.
            let at = at.map(|n| n.saturating_sub(1));
            let mut mirror = Mirror::load(&cfg.mirror);
            MoveLogic::apply(&mut pool, cfg, &mut mirror, id, target, at)
        }

        _ => Ok(()),
    }
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::site::{AssignLogic, CommentLogic, DeleteLogic, RenameLogic, SelectLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::mirror::Mirror;

/// Single-site mutations: rename, del, assign, comment, select, detail.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let mut mirror = Mirror::load(&cfg.mirror);

    match cmd {
        Commands::Rename { id, new_name } => {
            RenameLogic::apply(&mut pool, cfg, &mut mirror, id, new_name)
        }
        Commands::Del { id } => DeleteLogic::apply(&mut pool, cfg, &mut mirror, id),
        Commands::Assign { id, member } => {
            AssignLogic::apply(&mut pool, cfg, &mut mirror, id, member)
        }
        Commands::Comment { id, text } => {
            CommentLogic::apply(&mut pool, cfg, &mut mirror, id, text)
        }
        Commands::Select { id } => SelectLogic::select(&mut pool, cfg, &mut mirror, id),
        Commands::Detail => SelectLogic::detail(&mut pool, &mirror),
        _ => Ok(()),
    }
}

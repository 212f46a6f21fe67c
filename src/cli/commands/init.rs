use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Initialize config file, database schema and photo directory.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    audit(&pool.conn, "init", "", "database initialized")?;

    Ok(())
}

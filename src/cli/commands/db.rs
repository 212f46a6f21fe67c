use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::migrate_with_report;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            migrate_with_report(&pool.conn)?;
            return Ok(());
        }

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity: ok");
            } else {
                warning(format!("Database integrity: {result}"));
            }
            return Ok(());
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database optimized");
            return Ok(());
        }

        if *show_info {
            print_db_info(&mut pool, &cfg.database)?;
            return Ok(());
        }

        info("Nothing to do. Try `sitetrack db --info`.");
    }

    Ok(())
}

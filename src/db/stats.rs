use crate::db::pool::DbPool;
use crate::models::status::Status;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) SITES PER COLUMN
    //
    let total: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM sites", [], |row| row.get(0))?;
    println!("{}• Total sites:{} {}{}{}", CYAN, RESET, GREEN, total, RESET);

    for status in Status::ALL {
        let count: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM sites WHERE status = ?1",
            [status.to_db_str()],
            |row| row.get(0),
        )?;
        println!("    - {:<12} {}", status.label(), count);
    }

    //
    // 3) PHOTOS AND USERS
    //
    let photos: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM photos", [], |row| row.get(0))?;
    println!("{}• Photos:{} {}", CYAN, RESET, photos);

    let users: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    println!("{}• Accounts:{} {}", CYAN, RESET, users);

    //
    // 4) OLDEST / NEWEST SITE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM sites ORDER BY created_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM sites ORDER BY created_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    if let (Some(first), Some(last)) = (first, last) {
        println!("{}• Created between:{} {} and {}", CYAN, RESET, first, last);
    }

    println!();
    Ok(())
}

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::status::Status;
use rusqlite::params;

/// Rewrite `position` for one column so it matches an explicit ordering of
/// site ids. Ids not present in the list keep their row but are pushed after
/// the ordered ones (should not happen in practice; the board is rebuilt
/// from the full column before every move).
pub fn rebuild_positions(pool: &mut DbPool, status: Status, ordered_ids: &[String]) -> AppResult<()> {
    for (pos, id) in ordered_ids.iter().enumerate() {
        pool.conn.execute(
            "UPDATE sites SET position = ?1 WHERE id = ?2 AND status = ?3",
            params![pos as i64, id, status.to_db_str()],
        )?;
    }
    Ok(())
}

/// Compact positions of a column after a deletion, keeping relative order.
pub fn repack_column(pool: &mut DbPool, status: Status) -> AppResult<()> {
    let ids: Vec<String> = {
        let mut stmt = pool.conn.prepare(
            "SELECT id FROM sites WHERE status = ?1 ORDER BY position ASC",
        )?;
        let rows = stmt.query_map([status.to_db_str()], |row| row.get(0))?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        out
    };

    rebuild_positions(pool, status, &ids)
}

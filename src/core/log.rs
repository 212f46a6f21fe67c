use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::strip_ansi;
use ansi_term::Colour;

/// Color per audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" | "comment" | "assign" => Colour::Yellow,
        "move" => Colour::Cyan,
        "photo_attach" | "photo_detach" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target, message))
        })?;

        println!();
        for r in rows {
            let (id, date, operation, target, message) = r?;
            let colour = color_for_operation(&operation);
            let op_cell = colour.paint(format!("{operation:<18}"));
            // Width math on the painted cell would count escape codes;
            // strip them when measuring.
            debug_assert_eq!(strip_ansi(&op_cell.to_string()).len(), 18);
            println!("{id:>4}  {date}  {op_cell}  {target:<38}  {message}");
        }
        println!();
        Ok(())
    }
}

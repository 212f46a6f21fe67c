//! Board rendering and the `move` entry point.
//!
//! `MoveLogic` turns the command arguments into a drag event, applies the
//! pure reducer, and persists the returned next board: the moved site's
//! status and stamps, then the positions of both affected columns. All
//! writes read from the reducer's output, never from the pre-move state.

use crate::board::reducer::{self, DragEvent, Outcome};
use crate::board::Board;
use crate::config::Config;
use crate::db::db_utils::rebuild_positions;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{load_site, load_sites, update_status_times};
use crate::errors::AppResult;
use crate::models::status::Status;
use crate::store::mirror::Mirror;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::fmt_time;
use crate::utils::table::{Column, Table};
use chrono::Local;

pub struct MoveLogic;

impl MoveLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        mirror: &mut Mirror,
        id: &str,
        target: Status,
        at: Option<usize>,
    ) -> AppResult<()> {
        let Some(site) = load_site(pool, id)? else {
            warning(format!("No site found with id {id}; nothing moved"));
            return Ok(());
        };

        //
        // 1. Rebuild the board from the store and form the drag event
        //
        let sites = load_sites(pool)?;
        let board = Board::from_sites(&sites);
        let ev = DragEvent {
            item_id: site.id.clone(),
            source: site.status,
            target,
            target_index: at,
        };

        //
        // 2. Pure transition
        //
        let (next, outcome) = reducer::apply(&board, &ev, Local::now());

        //
        // 3. Persist from the computed next state
        //
        match outcome {
            Outcome::Noop => {
                info("Nothing to do");
                return Ok(());
            }
            Outcome::Transferred { from, to, .. } => {
                let moved = next.find_task(&site.id).ok_or_else(|| {
                    crate::errors::AppError::Other(format!(
                        "moved task {} missing from next board",
                        site.id
                    ))
                })?;
                update_status_times(
                    &pool.conn,
                    &site.id,
                    to,
                    moved.start_time,
                    moved.finish_time,
                )?;

                let from_ids: Vec<String> =
                    next.column(from).iter().map(|t| t.id.clone()).collect();
                let to_ids: Vec<String> =
                    next.column(to).iter().map(|t| t.id.clone()).collect();
                rebuild_positions(pool, from, &from_ids)?;
                rebuild_positions(pool, to, &to_ids)?;

                audit(
                    &pool.conn,
                    "move",
                    &site.id,
                    &format!(
                        "moved '{}' {} -> {}",
                        site.name,
                        from.to_db_str(),
                        to.to_db_str()
                    ),
                )?;
                success(format!(
                    "Moved '{}' to {}",
                    site.name,
                    to.label()
                ));
            }
            Outcome::Reordered { from, to } => {
                let ids: Vec<String> = next
                    .column(target)
                    .iter()
                    .map(|t| t.id.clone())
                    .collect();
                rebuild_positions(pool, target, &ids)?;

                audit(
                    &pool.conn,
                    "move",
                    &site.id,
                    &format!("reordered '{}' {} -> {} in {}", site.name, from, to, target.to_db_str()),
                )?;
                success(format!(
                    "Reordered '{}' to position {} in {}",
                    site.name,
                    to + 1,
                    target.label()
                ));
            }
        }

        mirror.sync(pool, &cfg.mirror)?;
        Ok(())
    }
}

pub struct BoardLogic;

const COL_WIDTH: usize = 34;

impl BoardLogic {
    /// Render the three columns side by side with per-column counts.
    pub fn render(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let sites = load_sites(pool)?;
        let board = Board::from_sites(&sites);

        let columns = Status::ALL
            .iter()
            .map(|s| Column {
                header: format!(
                    "{}●{} {} ({})",
                    color_for_status(*s),
                    RESET,
                    s.label(),
                    board.column(*s).len()
                ),
                width: COL_WIDTH,
            })
            .collect();
        let mut table = Table::new(columns);

        let depth = Status::ALL
            .iter()
            .map(|s| board.column(*s).len())
            .max()
            .unwrap_or(0);

        for row in 0..depth {
            let cells = Status::ALL
                .iter()
                .map(|s| match board.column(*s).get(row) {
                    Some(task) => {
                        let mut cell = task.title.clone();
                        if task.start_time.is_some() || task.finish_time.is_some() {
                            cell.push_str(&format!(
                                " [{} → {}]",
                                fmt_time(task.start_time),
                                fmt_time(task.finish_time)
                            ));
                        }
                        if let Some(who) = &task.assigned_to {
                            cell.push_str(&format!(" @{who}"));
                        }
                        cell
                    }
                    None => String::new(),
                })
                .collect();
            table.add_row(cells);
        }

        println!();
        print!("{}", table.render_with_separator(&cfg.separator_char));
        if board.total() == 0 {
            println!("  (no sites yet, `sitetrack add <name>` to create one)");
        }
        println!();
        Ok(())
    }
}

//! Site list mutations: rename, delete, assign, comment, select, detail.
//! Not-found ids and empty inputs are warnings, not failures; every change
//! lands in the audit log and refreshes the mirror.

use crate::config::Config;
use crate::db::db_utils::repack_column;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_site, load_site, update_assigned, update_comment, update_name,
};
use crate::errors::AppResult;
use crate::store::mirror::Mirror;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{RESET, color_for_optional_field};
use crate::utils::date::fmt_datetime;

pub struct RenameLogic;

impl RenameLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        mirror: &mut Mirror,
        id: &str,
        new_name: &str,
    ) -> AppResult<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            warning("New name cannot be empty; nothing changed");
            return Ok(());
        }
        let Some(site) = load_site(pool, id)? else {
            warning(format!("No site found with id {id}; nothing changed"));
            return Ok(());
        };

        update_name(&pool.conn, id, new_name)?;
        audit(
            &pool.conn,
            "edit",
            id,
            &format!("renamed '{}' to '{}'", site.name, new_name),
        )?;
        mirror.sync(pool, &cfg.mirror)?;

        success(format!("Renamed '{}' to '{}'", site.name, new_name));
        Ok(())
    }
}

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, cfg: &Config, mirror: &mut Mirror, id: &str) -> AppResult<()> {
        let Some(site) = load_site(pool, id)? else {
            warning(format!("No site found with id {id}; nothing deleted"));
            return Ok(());
        };

        delete_site(&pool.conn, id)?;
        repack_column(pool, site.status)?;

        // Deleting the selected site clears the selection (and with it the
        // photo viewer); other deletions leave the selection untouched.
        if mirror.selected.as_deref() == Some(id) {
            mirror.selected = None;
            mirror.viewing = None;
        }

        audit(
            &pool.conn,
            "del",
            id,
            &format!("deleted site '{}'", site.name),
        )?;
        mirror.sync(pool, &cfg.mirror)?;

        success(format!("Deleted site '{}'", site.name));
        Ok(())
    }
}

pub struct AssignLogic;

impl AssignLogic {
    /// The roster is advisory: any non-empty member string is accepted,
    /// unknown names just get a heads-up.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        mirror: &mut Mirror,
        id: &str,
        member: &str,
    ) -> AppResult<()> {
        let member = member.trim();
        if member.is_empty() {
            warning("Assignee cannot be empty; nothing changed");
            return Ok(());
        }
        let Some(site) = load_site(pool, id)? else {
            warning(format!("No site found with id {id}; nothing changed"));
            return Ok(());
        };

        if !cfg.team_members.iter().any(|m| m == member) {
            info(format!("'{member}' is not in the configured roster"));
        }

        update_assigned(&pool.conn, id, member)?;
        audit(
            &pool.conn,
            "assign",
            id,
            &format!("assigned '{}' to {}", site.name, member),
        )?;
        mirror.sync(pool, &cfg.mirror)?;

        success(format!("Assigned '{}' to {}", site.name, member));
        Ok(())
    }
}

pub struct CommentLogic;

impl CommentLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        mirror: &mut Mirror,
        id: &str,
        text: &str,
    ) -> AppResult<()> {
        let Some(site) = load_site(pool, id)? else {
            warning(format!("No site found with id {id}; nothing changed"));
            return Ok(());
        };

        update_comment(&pool.conn, id, text)?;
        audit(
            &pool.conn,
            "comment",
            id,
            &format!("updated comment on '{}'", site.name),
        )?;
        mirror.sync(pool, &cfg.mirror)?;

        success(format!("Updated comment on '{}'", site.name));
        Ok(())
    }
}

pub struct SelectLogic;

impl SelectLogic {
    pub fn select(
        pool: &mut DbPool,
        cfg: &Config,
        mirror: &mut Mirror,
        id: &str,
    ) -> AppResult<()> {
        let Some(site) = load_site(pool, id)? else {
            warning(format!("No site found with id {id}; selection unchanged"));
            return Ok(());
        };

        mirror.selected = Some(site.id.clone());
        mirror.viewing = None;
        mirror.sync(pool, &cfg.mirror)?;

        success(format!("Selected site '{}'", site.name));
        Ok(())
    }

    /// Print the detail view of the selected site.
    pub fn detail(pool: &mut DbPool, mirror: &Mirror) -> AppResult<()> {
        let Some(id) = &mirror.selected else {
            info("No site selected. Use `sitetrack select <id>` first.");
            return Ok(());
        };
        let Some(site) = load_site(pool, id)? else {
            info("Selected site no longer exists");
            return Ok(());
        };

        println!();
        println!("  {}  [{}]", site.name, site.id);
        println!("  Status:   {}", site.status.label());
        println!(
            "  Assigned: {}{}{}",
            color_for_optional_field(site.assigned_to.as_deref()),
            if site.assigned_to.is_some() {
                site.assignee_str()
            } else {
                "(nobody)"
            },
            RESET
        );
        if !site.comment.is_empty() {
            println!("  Comment:  {}", site.comment);
        }
        if site.start_time.is_some() {
            println!("  Started:  {}", fmt_datetime(site.start_time));
        }
        if site.done_time.is_some() {
            println!("  Finished: {}", fmt_datetime(site.done_time));
        }
        if !site.photos.is_empty() {
            println!("  Photos:");
            for (i, p) in site.photos.iter().enumerate() {
                let marker = if mirror.viewing == Some(i) { "▶" } else { " " };
                println!("   {marker} {}. {} ({})", i + 1, p.name, p.url);
            }
        }
        println!();
        Ok(())
    }
}

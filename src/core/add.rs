use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_site, next_position};
use crate::errors::AppResult;
use crate::models::site::Site;
use crate::models::status::Status;
use crate::store::mirror::Mirror;
use crate::ui::messages::{success, warning};
use chrono::Local;

pub struct AddLogic;

impl AddLogic {
    /// Create a site. Empty or whitespace-only names are silently rejected:
    /// the store stays unchanged and the command still exits 0, matching
    /// the validation no-op contract.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        mirror: &mut Mirror,
        name: &str,
        status: Option<Status>,
        assign: Option<String>,
    ) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            warning("Site name cannot be empty; nothing added");
            return Ok(());
        }

        //
        // 1. Build the site (fresh uuid, todo column, no timestamps)
        //
        let mut site = Site::new(name);

        //
        // 2. Direct-to-column creation stamps the timestamps the column implies
        //
        if let Some(status) = status {
            site.stamp_for_status(status, Local::now());
        }

        if let Some(member) = assign {
            let member = member.trim();
            if !member.is_empty() {
                site.assigned_to = Some(member.to_string());
            }
        }

        //
        // 3. Append at the tail of its column
        //
        site.position = next_position(&pool.conn, site.status)?;

        insert_site(&pool.conn, &site)?;
        audit(
            &pool.conn,
            "add",
            &site.id,
            &format!("added site '{}' ({})", site.name, site.status.to_db_str()),
        )?;

        mirror.sync(pool, &cfg.mirror)?;

        success(format!(
            "Added site '{}' to {} [{}]",
            site.name,
            site.status.label(),
            site.id
        ));
        Ok(())
    }
}

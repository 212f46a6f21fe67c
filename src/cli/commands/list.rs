use super::parse_status;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_sites;
use crate::errors::AppResult;
use crate::store::mirror::Mirror;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::fmt_time;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { status, assigned } = cmd {
        let wanted = match status {
            Some(code) => Some(parse_status(code)?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let mirror = Mirror::load(&cfg.mirror);
        let sites = load_sites(&mut pool)?;

        let mut table = Table::new(vec![
            Column { header: "".to_string(), width: 1 },
            Column { header: "ID".to_string(), width: 36 },
            Column { header: "NAME".to_string(), width: 24 },
            Column { header: "STATUS".to_string(), width: 13 },
            Column { header: "ASSIGNED".to_string(), width: 22 },
            Column { header: "START".to_string(), width: 6 },
            Column { header: "DONE".to_string(), width: 6 },
        ]);

        let mut shown = 0;
        for site in &sites {
            if let Some(wanted) = wanted
                && site.status != wanted
            {
                continue;
            }
            if let Some(member) = assigned
                && site.assigned_to.as_deref() != Some(member.as_str())
            {
                continue;
            }

            let marker = if mirror.selected.as_deref() == Some(site.id.as_str()) {
                "▶".to_string()
            } else {
                format!("{}●{}", color_for_status(site.status), RESET)
            };
            table.add_row(vec![
                marker,
                site.id.clone(),
                site.name.clone(),
                site.status.label().to_string(),
                site.assignee_str().to_string(),
                fmt_time(site.start_time),
                fmt_time(site.done_time),
            ]);
            shown += 1;
        }

        if shown == 0 {
            info("No sites to show");
        } else {
            println!();
            print!("{}", table.render());
            println!();
        }
    }

    Ok(())
}

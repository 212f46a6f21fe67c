use crate::auth;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::mirror::Mirror;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let mut mirror = Mirror::load(&cfg.mirror);

    match cmd {
        Commands::Register {
            email,
            password,
            first_name,
            last_name,
            company,
        } => {
            let user = auth::register(&mut pool, email, password, first_name, last_name, company)?;
            audit(
                &pool.conn,
                "register",
                &user.uid,
                &format!("registered {}", user.email),
            )?;
            success(format!("Account created for {}", user.email));
        }

        Commands::Login { email, password } => {
            let user = auth::sign_in(&mut pool, email, password)?;
            mirror.uid = Some(user.uid.clone());
            mirror.save(&cfg.mirror)?;
            success(format!("Signed in as {}", user.display_name()));
        }

        Commands::Logout => {
            mirror.uid = None;
            mirror.save(&cfg.mirror)?;
            success("Signed out");
        }

        Commands::Whoami => match &mirror.uid {
            Some(uid) => match auth::find_by_uid(&mut pool, uid)? {
                Some(user) => {
                    println!("{} <{}> ({})", user.display_name(), user.email, user.role);
                    if !user.company.is_empty() {
                        println!("Company: {}", user.company);
                    }
                }
                None => info("Session account no longer exists"),
            },
            None => info("Not signed in"),
        },

        _ => {}
    }

    Ok(())
}

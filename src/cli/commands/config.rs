use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::fs;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            match fs::read_to_string(&path) {
                Ok(content) => {
                    println!("\n# {}\n", path.display());
                    println!("{content}");
                }
                Err(_) => info(format!("No configuration file at {}", path.display())),
            }
            return Ok(());
        }

        if *check {
            return migrate::check_config();
        }

        if *do_migrate {
            return migrate::migrate_config();
        }

        info("Nothing to do. Try `sitetrack config --print`.");
    }

    Ok(())
}

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Fields every up-to-date config file must carry.
const REQUIRED_FIELDS: [&str; 5] = [
    "database",
    "photo_dir",
    "mirror",
    "team_members",
    "separator_char",
];

fn load_raw() -> AppResult<serde_yaml::Value> {
    let path = Config::config_file();
    let content = fs::read_to_string(&path)
        .map_err(|_| AppError::Config(format!("cannot read {}", path.display())))?;
    serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("cannot parse config file: {e}")))
}

fn missing_fields(raw: &serde_yaml::Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .filter(|f| raw.get(f).is_none())
        .copied()
        .collect()
}

/// `config --check`: report missing fields without touching the file.
pub fn check_config() -> AppResult<()> {
    let raw = load_raw()?;
    let missing = missing_fields(&raw);

    if missing.is_empty() {
        success("Configuration file is up to date");
    } else {
        for f in &missing {
            warning(format!("Missing field: {f}"));
        }
        info("Run `sitetrack config --migrate` to fill in defaults");
    }
    Ok(())
}

/// `config --migrate`: re-parse through the typed Config (serde defaults
/// fill every missing field) and rewrite the file.
pub fn migrate_config() -> AppResult<()> {
    let raw = load_raw()?;
    let missing = missing_fields(&raw);

    if missing.is_empty() {
        success("Configuration file already up to date");
        return Ok(());
    }

    let cfg: Config = serde_yaml::from_value(raw)
        .map_err(|e| AppError::Config(format!("cannot migrate config file: {e}")))?;
    cfg.save()?;

    success(format!(
        "Configuration migrated ({} field(s) filled with defaults)",
        missing.len()
    ));
    Ok(())
}

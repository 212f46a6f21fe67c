//! Local snapshot of board and session state.
//!
//! The SQLite database is the single source of truth; the mirror is a
//! disposable JSON file rewritten after every successful mutation and read
//! once at startup. A missing or corrupt mirror is silently rebuilt from
//! the database, never the other way around.

use crate::board::Board;
use crate::db::pool::DbPool;
use crate::db::queries::load_sites;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Mirror {
    #[serde(default)]
    pub board: Board,
    /// Currently selected site id, if any.
    #[serde(default)]
    pub selected: Option<String>,
    /// Photo-viewer index into the selected site's photo list.
    #[serde(default)]
    pub viewing: Option<usize>,
    /// Signed-in account, if any.
    #[serde(default)]
    pub uid: Option<String>,
}

impl Mirror {
    /// Read the mirror once at startup; any failure yields a fresh one.
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Mirror::default(),
        }
    }

    pub fn save(&self, path: &str) -> AppResult<()> {
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Rebuild the board projection from the database and persist the
    /// snapshot. Selection, viewer and session survive unless the caller
    /// cleared them.
    pub fn sync(&mut self, pool: &mut DbPool, path: &str) -> AppResult<()> {
        let sites = load_sites(pool)?;
        self.board = Board::from_sites(&sites);

        // A selection pointing at a deleted site is dropped here as well,
        // so a stale mirror cannot resurrect it.
        if let Some(sel) = &self.selected
            && !sites.iter().any(|s| &s.id == sel)
        {
            self.selected = None;
            self.viewing = None;
        }

        self.save(path)
    }
}

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success};
use rusqlite::{Connection, OptionalExtension, Result};

/// Latest schema version this build knows about.
const TARGET_VERSION: i32 = 2;

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn ensure_version_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);",
    )?;
    Ok(())
}

fn current_version(conn: &Connection) -> Result<i32> {
    let v: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(v.unwrap_or(0))
}

fn set_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    Ok(())
}

/// v1: sites and photos tables, board indexes.
fn migrate_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sites (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            status      TEXT NOT NULL DEFAULT 'todo'
                        CHECK(status IN ('todo','in-progress','done')),
            comment     TEXT NOT NULL DEFAULT '',
            assigned_to TEXT DEFAULT NULL,
            start_time  TEXT DEFAULT NULL,
            done_time   TEXT DEFAULT NULL,
            position    INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS photos (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            site_id  TEXT NOT NULL REFERENCES sites(id) ON DELETE CASCADE,
            name     TEXT NOT NULL,
            url      TEXT NOT NULL,
            path     TEXT NOT NULL,
            position INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_sites_status_position ON sites(status, position);
        CREATE INDEX IF NOT EXISTS idx_photos_site ON photos(site_id, position);
        "#,
    )?;
    Ok(())
}

/// v2: local account table for the auth commands.
fn migrate_v2(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            uid           TEXT PRIMARY KEY,
            email         TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            first_name    TEXT NOT NULL DEFAULT '',
            last_name     TEXT NOT NULL DEFAULT '',
            company       TEXT NOT NULL DEFAULT '',
            role          TEXT NOT NULL DEFAULT 'employee',
            created_at    TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Run every migration newer than the stored schema version, in order.
/// Called on every startup path that touches the DB, so a fresh file and an
/// old file both end up at TARGET_VERSION.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_version_table(conn)?;
    ensure_log_table(conn)?;

    let mut version = current_version(conn)?;

    while version < TARGET_VERSION {
        let next = version + 1;
        match next {
            1 => migrate_v1(conn)?,
            2 => migrate_v2(conn)?,
            other => {
                return Err(AppError::Migration(format!(
                    "unknown schema migration v{other}"
                )));
            }
        }
        set_version(conn, next)?;
        if let Err(e) = crate::db::log::audit(
            conn,
            "migration_applied",
            &format!("v{next}"),
            &format!("schema migrated to v{next}"),
        ) {
            error(format!("Failed to log migration v{next}: {}", e));
        }
        version = next;
    }

    Ok(())
}

/// `db --migrate`: run migrations and report.
pub fn migrate_with_report(conn: &Connection) -> AppResult<()> {
    let before = {
        ensure_version_table(conn)?;
        current_version(conn)?
    };
    run_pending_migrations(conn)?;
    let after = current_version(conn)?;
    if before == after {
        success(format!("Database already at schema v{after}"));
    } else {
        success(format!("Database migrated: v{before} → v{after}"));
    }
    Ok(())
}

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::photo::Photo;
use crate::models::site::Site;
use crate::models::status::Status;
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn parse_optional_ts(raw: Option<String>) -> Option<DateTime<Local>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Local))
}

pub fn map_site_row(row: &Row) -> Result<Site> {
    let status_str: String = row.get("status")?;
    let status = Status::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Site {
        id: row.get("id")?,
        name: row.get("name")?,
        status,
        comment: row.get("comment")?,
        assigned_to: row.get("assigned_to")?,
        photos: Vec::new(), // filled by the caller when needed
        start_time: parse_optional_ts(row.get("start_time")?),
        done_time: parse_optional_ts(row.get("done_time")?),
        position: row.get("position")?,
        created_at: row.get("created_at")?,
    })
}

/// Load every site in board order (column, then position within it),
/// with photos attached.
pub fn load_sites(pool: &mut DbPool) -> AppResult<Vec<Site>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM sites
         ORDER BY CASE status
                    WHEN 'todo' THEN 0
                    WHEN 'in-progress' THEN 1
                    ELSE 2
                  END, position ASC",
    )?;

    let rows = stmt.query_map([], map_site_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    drop(stmt);

    for site in &mut out {
        site.photos = load_photos(&pool.conn, &site.id)?;
    }
    Ok(out)
}

pub fn load_site(pool: &mut DbPool, id: &str) -> AppResult<Option<Site>> {
    let site = pool
        .conn
        .query_row("SELECT * FROM sites WHERE id = ?1", [id], map_site_row)
        .optional()?;

    match site {
        Some(mut s) => {
            s.photos = load_photos(&pool.conn, &s.id)?;
            Ok(Some(s))
        }
        None => Ok(None),
    }
}

pub fn insert_site(conn: &Connection, site: &Site) -> AppResult<()> {
    conn.execute(
        "INSERT INTO sites (id, name, status, comment, assigned_to, start_time, done_time, position, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            site.id,
            site.name,
            site.status.to_db_str(),
            site.comment,
            site.assigned_to,
            site.start_time.map(|t| t.to_rfc3339()),
            site.done_time.map(|t| t.to_rfc3339()),
            site.position,
            site.created_at,
        ],
    )?;
    Ok(())
}

/// Next free ordinal at the tail of a column.
pub fn next_position(conn: &Connection, status: Status) -> AppResult<i64> {
    let max: Option<i64> = conn.query_row(
        "SELECT MAX(position) FROM sites WHERE status = ?1",
        [status.to_db_str()],
        |row| row.get(0),
    )?;
    Ok(max.map(|m| m + 1).unwrap_or(0))
}

pub fn update_name(conn: &Connection, id: &str, name: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE sites SET name = ?1 WHERE id = ?2",
        params![name, id],
    )?;
    Ok(())
}

pub fn update_comment(conn: &Connection, id: &str, comment: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE sites SET comment = ?1 WHERE id = ?2",
        params![comment, id],
    )?;
    Ok(())
}

pub fn update_assigned(conn: &Connection, id: &str, assigned_to: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE sites SET assigned_to = ?1 WHERE id = ?2",
        params![assigned_to, id],
    )?;
    Ok(())
}

/// Persist the result of a board transition for one site: new column plus
/// any stamps the reducer set. Timestamps already present are left alone.
pub fn update_status_times(
    conn: &Connection,
    id: &str,
    status: Status,
    start_time: Option<DateTime<Local>>,
    done_time: Option<DateTime<Local>>,
) -> AppResult<()> {
    conn.execute(
        "UPDATE sites SET status = ?1,
                          start_time = COALESCE(start_time, ?2),
                          done_time  = COALESCE(done_time, ?3)
         WHERE id = ?4",
        params![
            status.to_db_str(),
            start_time.map(|t| t.to_rfc3339()),
            done_time.map(|t| t.to_rfc3339()),
            id
        ],
    )?;
    Ok(())
}

pub fn delete_site(conn: &Connection, id: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM sites WHERE id = ?1", [id])?;
    Ok(n)
}

// ---------------------------
// Photos
// ---------------------------

pub fn load_photos(conn: &Connection, site_id: &str) -> AppResult<Vec<Photo>> {
    let mut stmt = conn.prepare(
        "SELECT name, url, path FROM photos WHERE site_id = ?1 ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([site_id], |row| {
        Ok(Photo {
            name: row.get(0)?,
            url: row.get(1)?,
            path: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_photo(conn: &Connection, site_id: &str, photo: &Photo) -> AppResult<()> {
    let pos: Option<i64> = conn.query_row(
        "SELECT MAX(position) FROM photos WHERE site_id = ?1",
        [site_id],
        |row| row.get(0),
    )?;
    conn.execute(
        "INSERT INTO photos (site_id, name, url, path, position)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            site_id,
            photo.name,
            photo.url,
            photo.path,
            pos.map(|p| p + 1).unwrap_or(0)
        ],
    )?;
    Ok(())
}

/// Delete the photo at a 0-based index within a site's ordered list and
/// repack the remaining positions.
pub fn delete_photo_at(conn: &Connection, site_id: &str, index: usize) -> AppResult<()> {
    let ids: Vec<i64> = {
        let mut stmt = conn.prepare(
            "SELECT id FROM photos WHERE site_id = ?1 ORDER BY position ASC",
        )?;
        let rows = stmt.query_map([site_id], |row| row.get(0))?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        out
    };

    let Some(photo_id) = ids.get(index) else {
        return Err(AppError::InvalidPhotoIndex(index));
    };
    conn.execute("DELETE FROM photos WHERE id = ?1", [photo_id])?;

    for (pos, id) in ids.iter().filter(|i| *i != photo_id).enumerate() {
        conn.execute(
            "UPDATE photos SET position = ?1 WHERE id = ?2",
            params![pos as i64, id],
        )?;
    }
    Ok(())
}

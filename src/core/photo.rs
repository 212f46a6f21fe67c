//! Photo attach/detach and the viewer cursor.
//!
//! Attach is the upload step plus a list append; detach removes by index
//! and clears the viewer if it pointed at the removed slot. The viewer
//! navigation clamps to the list bounds.

use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_photo_at, insert_photo, load_site};
use crate::errors::{AppError, AppResult};
use crate::store::blob::BlobStore;
use crate::store::mirror::Mirror;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub struct PhotoLogic;

impl PhotoLogic {
    /// Upload each file into the blob store, then append to the site's
    /// photo list. Requires a signed-in session: the blob path is
    /// namespaced per uid.
    pub fn attach(
        pool: &mut DbPool,
        cfg: &Config,
        mirror: &mut Mirror,
        blobs: &BlobStore,
        id: &str,
        files: &[String],
    ) -> AppResult<()> {
        let uid = mirror.uid.clone().ok_or(AppError::NotSignedIn)?;
        let Some(site) = load_site(pool, id)? else {
            warning(format!("No site found with id {id}; nothing attached"));
            return Ok(());
        };

        for file in files {
            let photo = blobs.upload(&uid, &site.id, Path::new(file))?;
            insert_photo(&pool.conn, &site.id, &photo)?;
            audit(
                &pool.conn,
                "photo_attach",
                &site.id,
                &format!("attached '{}' to '{}'", photo.name, site.name),
            )?;
            success(format!("Attached '{}' -> {}", photo.name, photo.url));
        }

        mirror.sync(pool, &cfg.mirror)?;
        Ok(())
    }

    /// Detach by 0-based index. A viewer pointing at the removed index is
    /// cleared; a viewer on another index is left alone.
    pub fn detach(
        pool: &mut DbPool,
        cfg: &Config,
        mirror: &mut Mirror,
        blobs: &BlobStore,
        id: &str,
        index: usize,
    ) -> AppResult<()> {
        let Some(site) = load_site(pool, id)? else {
            warning(format!("No site found with id {id}; nothing detached"));
            return Ok(());
        };
        let Some(photo) = site.photos.get(index) else {
            return Err(AppError::InvalidPhotoIndex(index));
        };

        delete_photo_at(&pool.conn, &site.id, index)?;
        blobs.remove(&photo.path)?;

        if mirror.selected.as_deref() == Some(id) && mirror.viewing == Some(index) {
            mirror.viewing = None;
        }

        audit(
            &pool.conn,
            "photo_detach",
            &site.id,
            &format!("detached '{}' from '{}'", photo.name, site.name),
        )?;
        mirror.sync(pool, &cfg.mirror)?;

        success(format!("Detached '{}'", photo.name));
        Ok(())
    }

    pub fn list(pool: &mut DbPool, id: &str) -> AppResult<()> {
        let Some(site) = load_site(pool, id)? else {
            warning(format!("No site found with id {id}"));
            return Ok(());
        };

        if site.photos.is_empty() {
            info(format!("No photos attached to '{}'", site.name));
            return Ok(());
        }
        for (i, p) in site.photos.iter().enumerate() {
            println!("  {}. {} ({})", i + 1, p.name, p.url);
        }
        Ok(())
    }

    /// Point the viewer at a photo of the selected site.
    pub fn view(
        pool: &mut DbPool,
        cfg: &Config,
        mirror: &mut Mirror,
        id: &str,
        index: usize,
    ) -> AppResult<()> {
        let Some(site) = load_site(pool, id)? else {
            warning(format!("No site found with id {id}"));
            return Ok(());
        };
        if index >= site.photos.len() {
            return Err(AppError::InvalidPhotoIndex(index));
        }

        mirror.selected = Some(site.id.clone());
        mirror.viewing = Some(index);
        mirror.sync(pool, &cfg.mirror)?;

        let p = &site.photos[index];
        success(format!("Viewing {}. {} ({})", index + 1, p.name, p.url));
        Ok(())
    }

    /// Move the viewer one step; clamps at both ends instead of wrapping.
    pub fn step(pool: &mut DbPool, cfg: &Config, mirror: &mut Mirror, delta: i64) -> AppResult<()> {
        let Some(id) = mirror.selected.clone() else {
            return Err(AppError::NoSelection);
        };
        let Some(site) = load_site(pool, &id)? else {
            return Err(AppError::SiteNotFound(id));
        };
        let Some(current) = mirror.viewing else {
            info("Viewer not open. Use `sitetrack photo view <id> <n>` first.");
            return Ok(());
        };
        if site.photos.is_empty() {
            mirror.viewing = None;
            mirror.sync(pool, &cfg.mirror)?;
            return Ok(());
        }

        let last = site.photos.len() - 1;
        // A stale cursor past the end of the list clamps before stepping.
        let current = current.min(last);
        let next = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (current + delta as usize).min(last)
        };

        mirror.viewing = Some(next);
        mirror.sync(pool, &cfg.mirror)?;

        let p = &site.photos[next];
        success(format!("Viewing {}. {} ({})", next + 1, p.name, p.url));
        Ok(())
    }
}

//! Managed photo storage: a directory tree of uploaded files addressed by
//! `<uid>/<site-id>/<file-name>`, with `file://` URLs handed back to the
//! photo list. The upload is a plain copy; a failed copy leaves no photo
//! row behind.

use crate::errors::{AppError, AppResult};
use crate::models::photo::Photo;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: &str) -> Self {
        Self {
            root: PathBuf::from(root),
        }
    }

    /// Copy a local file into the store and return its photo record.
    pub fn upload(&self, uid: &str, site_id: &str, file: &Path) -> AppResult<Photo> {
        if !file.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found: {}", file.display()),
            )));
        }

        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Other(format!("invalid file name: {}", file.display())))?;

        let rel = format!("{uid}/{site_id}/{name}");
        let dest = self.root.join(&rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(file, &dest)?;

        Ok(Photo {
            name,
            url: self.url_for(&rel),
            path: rel,
        })
    }

    /// Public URL for a stored path.
    pub fn url_for(&self, rel: &str) -> String {
        format!("file://{}", self.root.join(rel).display())
    }

    /// Remove the stored bytes for a detached photo. Missing files are
    /// ignored; the database row is authoritative.
    pub fn remove(&self, rel: &str) -> AppResult<()> {
        let full = self.root.join(rel);
        if full.exists() {
            fs::remove_file(full)?;
        }
        Ok(())
    }
}

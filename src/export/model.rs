use crate::models::site::Site;
use crate::utils::date::fmt_datetime;
use serde::Serialize;

/// Flat export row for one site.
#[derive(Debug, Serialize)]
pub struct SiteExport {
    pub id: String,
    pub name: String,
    pub status: String,
    pub assigned_to: String,
    pub comment: String,
    pub photos: usize,
    pub start_time: String,
    pub done_time: String,
    pub created_at: String,
}

impl SiteExport {
    pub fn from_site(site: &Site) -> Self {
        Self {
            id: site.id.clone(),
            name: site.name.clone(),
            status: site.status.to_db_str().to_string(),
            assigned_to: site.assignee_str().to_string(),
            comment: site.comment.clone(),
            photos: site.photos.len(),
            start_time: fmt_datetime(site.start_time),
            done_time: fmt_datetime(site.done_time),
            created_at: site.created_at.clone(),
        }
    }
}

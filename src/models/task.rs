use super::site::Site;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Render-only projection of a [`Site`] into a board column.
/// Disposable: recomputed from the site list, never authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub start_time: Option<DateTime<Local>>,
    pub finish_time: Option<DateTime<Local>>,
    pub assigned_to: Option<String>,
    pub description: String,
}

impl Task {
    pub fn from_site(site: &Site) -> Self {
        Self {
            id: site.id.clone(),
            title: site.name.clone(),
            start_time: site.start_time,
            finish_time: site.done_time,
            assigned_to: site.assigned_to.clone(),
            description: site.comment.clone(),
        }
    }
}

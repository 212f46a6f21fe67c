use super::photo::Photo;
use super::status::Status;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The primary tracked unit of work. The site list is the single source of
/// truth; the board is a projection derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: String,                           // ⇔ sites.id (uuid v4, stable for life)
    pub name: String,                         // ⇔ sites.name
    pub status: Status,                       // ⇔ sites.status
    pub comment: String,                      // ⇔ sites.comment
    pub assigned_to: Option<String>,          // ⇔ sites.assigned_to
    pub photos: Vec<Photo>,                   // ⇔ photos rows, ordered by position
    pub start_time: Option<DateTime<Local>>,  // set once, on first entry into in-progress
    pub done_time: Option<DateTime<Local>>,   // set once, on first entry into done
    pub position: i64,                        // ⇔ sites.position (ordinal within its column)
    pub created_at: String,                   // ⇔ sites.created_at (ISO8601)
}

impl Site {
    /// Fresh site as created from the CLI: todo column, no assignment,
    /// no photos, no timestamps.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            status: Status::Todo,
            comment: String::new(),
            assigned_to: None,
            photos: Vec::new(),
            start_time: None,
            done_time: None,
            position: 0,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Stamp timestamps appropriate for the column a site is created into.
    /// Created directly in done, a site gets both stamps.
    pub fn stamp_for_status(&mut self, status: Status, now: DateTime<Local>) {
        self.status = status;
        match status {
            Status::Todo => {}
            Status::InProgress => {
                if self.start_time.is_none() {
                    self.start_time = Some(now);
                }
            }
            Status::Done => {
                if self.start_time.is_none() {
                    self.start_time = Some(now);
                }
                if self.done_time.is_none() {
                    self.done_time = Some(now);
                }
            }
        }
    }

    pub fn assignee_str(&self) -> &str {
        self.assigned_to.as_deref().unwrap_or("")
    }
}

//! Timestamp formatting helpers for board and detail output.

use chrono::{DateTime, Local};

/// Clock-face rendering of an optional stamp, `--:--` when unset.
pub fn fmt_time(ts: Option<DateTime<Local>>) -> String {
    match ts {
        Some(t) => t.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Full date-time rendering for detail views.
pub fn fmt_datetime(ts: Option<DateTime<Local>>) -> String {
    match ts {
        Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::status::Status;

/// Column dot color, matching the board legend.
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Todo => YELLOW,
        Status::InProgress => CYAN,
        Status::Done => GREEN,
    }
}

/// Remove ANSI escape sequences so width math sees only visible text.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Returns GREY when the field is empty (None or "" or "--:--"),
/// and RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != "--:--" => RESET,
        _ => GREY,
    }
}

pub mod add;
pub mod auth;
pub mod backup;
pub mod board;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod photo;
pub mod site;

use crate::errors::{AppError, AppResult};
use crate::models::status::Status;

/// Parse a CLI column code, with a helpful error on bad input.
pub(crate) fn parse_status(code: &str) -> AppResult<Status> {
    Status::from_code(code).ok_or_else(|| {
        AppError::InvalidStatus(format!(
            "'{code}'. Use one of: todo, in-progress, done"
        ))
    })
}

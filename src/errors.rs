//! Unified application error type.
//! All modules (db, core, auth, cli, store) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid photo index: {0}")]
    InvalidPhotoIndex(usize),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No site found with id {0}")]
    SiteNotFound(String),

    #[error("No site selected")]
    NoSelection,

    // ---------------------------
    // Auth errors
    // ---------------------------
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account already exists for {0}")]
    DuplicateEmail(String),

    #[error("Not signed in")]
    NotSignedIn,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

//! Unified application error type.
//! All modules (db, core, cache, cli, utils) return AppError to keep the
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

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Session cache errors
    // ---------------------------
    // Unreadable or corrupt cache CONTENT is never an error (it degrades
    // to "no session"); this variant covers failures writing the slot.
    #[error("Session cache error: {0}")]
    Cache(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// True for errors the user fixes by changing input, not by retrying.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::InvalidDate(_) | AppError::InvalidTimestamp(_)
        )
    }
}

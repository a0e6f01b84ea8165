//! Error handling for waitlist
//!
//! This module defines the error types used throughout the application.
//! Lookup misses and table rendering failures are recovered by the command
//! handlers; everything else propagates to `main`.

use std::io;
use thiserror::Error;

/// Result type alias for waitlist operations
pub type Result<T> = std::result::Result<T, Error>;

/// How an entry lookup was attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRef {
    /// Looked up by numeric row ID, kept as the digits given
    Id(String),
    /// Looked up by exact title
    Title(String),
}

/// Main error type for waitlist operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Home directory could not be determined
    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// No wait list with this exact name
    #[error("Could not find wait list with name `{name}`")]
    ListNotFound { name: String },

    /// No entry matching the ID or title in the list
    #[error("{}", entry_not_found_message(.entry, .list))]
    EntryNotFound { entry: EntryRef, list: String },

    /// Attribute argument is not a single `key=value` pair
    #[error(
        "Received attribute in wrong format: {attribute}, should be in keyword format like `imdb_id=tt1234567`"
    )]
    InvalidAttribute { attribute: String },

    /// Table could not be rendered
    #[error("{reason}")]
    Render { reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed: {field} - {reason}")]
    ConfigValidation { field: String, reason: String },
}

fn entry_not_found_message(entry: &EntryRef, list: &str) -> String {
    match entry {
        EntryRef::Id(id) => {
            format!("Could not find matching wait entry with ID {id} in list `{list}`")
        }
        EntryRef::Title(title) => {
            format!("Could not find matching wait entry with title `{title}` in list `{list}`")
        }
    }
}

impl Error {
    /// Create a list-not-found error
    pub fn list_not_found<S: Into<String>>(name: S) -> Self {
        Error::ListNotFound { name: name.into() }
    }

    /// Create a render error
    pub fn render<S: Into<String>>(reason: S) -> Self {
        Error::Render {
            reason: reason.into(),
        }
    }

    /// Create a config validation error
    pub fn config_validation<S: Into<String>>(field: S, reason: S) -> Self {
        Error::ConfigValidation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is a missing list or entry
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ListNotFound { .. } | Error::EntryNotFound { .. })
    }

    /// Get the error category for logging purposes
    pub fn category(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Json(_) => "json",
            Error::Database(_) => "database",
            Error::HomeDirectoryNotFound => "system",
            Error::ListNotFound { .. } | Error::EntryNotFound { .. } => "not_found",
            Error::InvalidAttribute { .. } => "arguments",
            Error::Render { .. } => "render",
            Error::ConfigValidation { .. } => "config",
        }
    }
}

//! Common error types for packcheck.
//!
//! These cover conditions that stop a run outright. Problems found inside a
//! pack are never errors; they are reported as findings.

use std::path::PathBuf;
use thiserror::Error;

/// Common error type for packcheck operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Root directory not readable: {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a pack directory: {0}")]
    NotAPack(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias using common Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_unreadable_message() {
        let err = Error::RootUnreadable {
            path: PathBuf::from("/nowhere"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nowhere"));
        assert!(msg.contains("gone"));
    }
}

//! JSON well-formedness checks.

use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Why a file could not be accepted as JSON.
#[derive(Error, Debug)]
pub enum JsonCheckError {
    #[error("Error reading file: {0}")]
    Read(#[from] std::io::Error),

    #[error("JSON syntax error: {message} (byte {offset})")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
        offset: usize,
    },
}

impl JsonCheckError {
    /// Line/column of a syntax error, 1-based.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            JsonCheckError::Syntax { line, column, .. } => Some((*line, *column)),
            JsonCheckError::Read(_) => None,
        }
    }
}

/// Read a file and parse it as JSON, returning the parsed document.
pub fn check_json_file(path: &Path) -> Result<Value, JsonCheckError> {
    let content = std::fs::read_to_string(path)?;
    check_json_str(&content)
}

/// Parse text as JSON. No schema is applied.
pub fn check_json_str(content: &str) -> Result<Value, JsonCheckError> {
    serde_json::from_str(content).map_err(|e| {
        let (line, column) = (e.line(), e.column());
        JsonCheckError::Syntax {
            message: e.to_string(),
            line,
            column,
            offset: byte_offset(content, line, column),
        }
    })
}

fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let preceding: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (preceding + column.saturating_sub(1)).min(content.len())
}

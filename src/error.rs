//! Error types for cellscope.

use thiserror::Error;

/// All errors the crate can produce.
///
/// Analysis itself never surfaces these to the caller — [`crate::analyze`]
/// always returns a (possibly partial) report. They exist for the fallible
/// seams underneath: parsing, the walk depth guard, and CLI I/O.
#[derive(Debug, Error)]
pub enum CellscopeError {
    /// Tree-sitter could not produce a tree at all.
    #[error("parse error: {0}")]
    Parse(String),

    /// Statement nesting exceeded the walker's recursion ceiling.
    #[error("statement nesting exceeds depth limit ({0})")]
    DepthLimit(usize),

    /// Reading source input failed (CLI only).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed (CLI only).
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CellscopeError>;

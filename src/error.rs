//! Error types for Emitab.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! User input never surfaces here: malformed filter text is absorbed by
//! sanitization and defaulting, so only infrastructure failures remain.

use thiserror::Error;

/// Result type alias for Emitab operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors that can occur in Emitab.
#[derive(Debug, Error)]
pub enum TableError {
    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

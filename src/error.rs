//! Error types for Bookdex
//!
//! Provides a unified error type for catalogue and shell operations. The
//! core containers report their own narrower error codes
//! ([`BufferError`](crate::buffer::BufferError)) which convert into this one.

use thiserror::Error;

use crate::buffer::BufferError;

/// Result type alias using BookdexError
pub type Result<T> = std::result::Result<T, BookdexError>;

/// Unified error type for Bookdex operations
#[derive(Debug, Error)]
pub enum BookdexError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Buffer Errors
    // -------------------------------------------------------------------------
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    // -------------------------------------------------------------------------
    // Catalogue Errors
    // -------------------------------------------------------------------------
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("Unknown search area: {0}")]
    UnknownArea(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

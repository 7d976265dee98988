//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error; [`HandlerError`] classifies relay failures so handlers
//! can answer each kind with its own reply.

use thiserror::Error;

/// Top-level error for docbot (bot transport, handler, IO).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of a single download → convert → upload relay.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Scratch storage unavailable: {0}")]
    Storage(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Conversion failed: {0}")]
    Conversion(String),

    #[error("Conversion timed out after {0}s")]
    Timeout(u64),

    #[error("Upload failed: {0}")]
    Upload(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;

//! Error types for citation marker operations.
//!
//! Pattern matching itself is total (a pattern matches zero or more times,
//! nothing can throw), so the error surface is limited to the typed layer
//! on top of the raw captures.

use thiserror::Error;

/// Result type alias for citation marker operations
pub type MarkerResult<T> = Result<T, MarkerError>;

/// Error types for citation marker operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    /// Source-kind token outside the closed six-value set
    #[error("unknown citation source kind '{0}' (expected search|image|news|video|ref|file)")]
    UnknownSourceKind(String),
}

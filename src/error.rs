//! Error types for brandsift.
//!
//! Extraction itself never fails - malformed input degrades to empty or
//! partial output. Errors exist only at the rate limiter's backing-store
//! boundary, where the limiter absorbs them with fail-open semantics.

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The rate limiter's backing counter store could not be reached.
    #[error("backing store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

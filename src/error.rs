//! Error types for extraction operations.
//!
//! Only [`Error::Parse`] is a hard failure. Sub-threshold documents surface
//! as [`Error::NoContent`] so callers can distinguish "nothing parseable"
//! from "parsed fine but no article found". Per-image conditions never reach
//! this enum; they are recorded as warnings on the extracted article.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be turned into any document tree.
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// Every candidate container scored below the minimum content threshold.
    #[error("no extractable content found")]
    NoContent,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for hexagram table lookups and input decoding.

use thiserror::Error;

/// Errors from line decoding, table lookups and casting helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GuaError {
    /// Malformed caller input (wrong length, out-of-range code, unknown glyph).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A static table that is exhaustive by construction failed to resolve.
    #[error("internal table invariant violated: {0}")]
    InternalInvariant(&'static str),
}

impl GuaError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// True for errors caused by the caller's input rather than a table defect.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

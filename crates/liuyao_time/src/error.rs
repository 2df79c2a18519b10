//! Error types for the calendar adapter.

use liuyao_base::GuaError;
use thiserror::Error;

/// Errors from timestamp parsing and pillar computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Timestamp text could not be parsed or lies outside the supported range.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    /// UTC offset outside ±14 hours.
    #[error("invalid UTC offset: {0} hours")]
    InvalidOffset(i32),
    #[error(transparent)]
    Gua(#[from] GuaError),
}

impl CalendarError {
    /// True when the caller's input (timestamp text or offset) was at fault.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidTimestamp(_) | Self::InvalidOffset(_) => true,
            Self::Gua(e) => e.is_invalid_input(),
        }
    }
}

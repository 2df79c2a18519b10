//! Error type for the composed engine.

use liuyao_base::GuaError;
use liuyao_time::CalendarError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error(transparent)]
    Gua(#[from] GuaError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl EngineError {
    /// True when the caller's input was at fault rather than a table defect.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Gua(e) => e.is_invalid_input(),
            Self::Calendar(e) => e.is_invalid_input(),
        }
    }
}

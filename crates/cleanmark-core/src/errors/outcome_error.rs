//! Errors surfaced by the scan outcome contract.

use super::error_code::{self, CleanmarkErrorCode};
use super::ProducerError;

/// Errors returned while building or reading a scan outcome.
#[derive(Debug, thiserror::Error)]
pub enum OutcomeError {
    /// The deferred clean markup producer failed. The original cause is kept
    /// as the error source; no fallback string is ever substituted.
    #[error("clean markup production failed: {source}")]
    MarkupProduction {
        #[source]
        source: ProducerError,
    },

    /// An outcome was built without a field the contract requires.
    #[error("scan outcome is missing required field: {field}")]
    MissingField { field: &'static str },
}

impl CleanmarkErrorCode for OutcomeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MarkupProduction { .. } => error_code::MARKUP_PRODUCTION_FAILED,
            Self::MissingField { .. } => error_code::OUTCOME_INCOMPLETE,
        }
    }
}

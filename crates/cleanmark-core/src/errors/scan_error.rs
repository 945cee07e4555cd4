//! Scan errors reported by a sanitizer engine.

use super::error_code::{self, CleanmarkErrorCode};
use super::OutcomeError;

/// Errors that stop a scan before an outcome is handed to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("input rejected: {reason}")]
    InputRejected { reason: String },

    #[error("sanitization policy unavailable: {reason}")]
    PolicyUnavailable { reason: String },

    #[error("Outcome error: {0}")]
    Outcome(#[from] OutcomeError),
}

impl CleanmarkErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InputRejected { .. } => error_code::INPUT_REJECTED,
            Self::PolicyUnavailable { .. } => error_code::POLICY_ERROR,
            Self::Outcome(e) => e.error_code(),
        }
    }
}

//! Errors raised by a deferred markup producer.

use super::error_code::{self, CleanmarkErrorCode};

/// Failure while computing the clean markup string on demand.
#[derive(Debug, thiserror::Error)]
pub enum ProducerError {
    #[error("serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("captured scan state unavailable: {reason}")]
    StateUnavailable { reason: String },

    #[error("producer failed: {0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ProducerError {
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization {
            reason: reason.into(),
        }
    }
}

impl CleanmarkErrorCode for ProducerError {
    fn error_code(&self) -> &'static str {
        error_code::PRODUCER_ERROR
    }
}

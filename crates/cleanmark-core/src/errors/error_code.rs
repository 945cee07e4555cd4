//! CleanmarkErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string that
/// callers can match on without parsing messages.
pub trait CleanmarkErrorCode {
    /// Returns the error code string (e.g., "MARKUP_PRODUCTION_FAILED").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PRODUCER_ERROR: &str = "PRODUCER_ERROR";
pub const MARKUP_PRODUCTION_FAILED: &str = "MARKUP_PRODUCTION_FAILED";
pub const OUTCOME_INCOMPLETE: &str = "OUTCOME_INCOMPLETE";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const INPUT_REJECTED: &str = "INPUT_REJECTED";
pub const POLICY_ERROR: &str = "POLICY_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

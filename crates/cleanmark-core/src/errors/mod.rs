//! Error handling for cleanmark.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod outcome_error;
pub mod producer_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::CleanmarkErrorCode;
pub use outcome_error::OutcomeError;
pub use producer_error::ProducerError;
pub use scan_error::ScanError;

//! # cleanmark-core
//!
//! Foundation crate for the cleanmark scan outcome contract.
//! Defines the deferred producer trait, clock, errors, config, logging setup,
//! and constants. `cleanmark-outcome` builds the outcome type on top of these.

pub mod clock;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CleanmarkConfig;
pub use errors::{CleanmarkErrorCode, ConfigError, OutcomeError, ProducerError, ScanError};
pub use traits::{FixedMarkup, MarkupProducer};

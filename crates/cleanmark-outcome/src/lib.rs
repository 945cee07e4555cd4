//! # cleanmark-outcome
//!
//! The value object a sanitizer engine hands back after a scan.
//!
//! A [`ScanOutcome`] carries the clean markup (produced on demand), an
//! optional parsed fragment of it, frozen diagnostics, and scan timing.
//!
//! **Only [`ScanOutcome::clean_markup`] is safe to emit.** Diagnostics are
//! advisory: an empty list does NOT mean the input was free of attacks. The
//! sanitizer's rewrite and serialize round trip drops many attack vectors
//! without ever noticing them, so there is no way to learn from the
//! diagnostics whether the input was dangerous.

pub mod builder;
pub mod diagnostics;
pub mod engine;
pub mod outcome;
pub mod summary;

pub use builder::ScanOutcomeBuilder;
pub use diagnostics::Diagnostics;
pub use engine::SanitizerEngine;
pub use outcome::ScanOutcome;
pub use summary::ScanSummary;

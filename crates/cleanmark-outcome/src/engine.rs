use cleanmark_core::errors::ScanError;

use crate::outcome::ScanOutcome;

/// The producer side of the trust boundary.
///
/// An engine parses, rewrites, and serializes input against its policy, then
/// hands the caller a [`ScanOutcome`]. Engines must capture the scan start
/// before sanitizing and build the outcome only once sanitizing is complete.
pub trait SanitizerEngine: Send + Sync {
    /// Parsed-tree type the engine attaches to outcomes.
    type Fragment: Send + Sync;

    /// Sanitize `input` and return the outcome of the scan.
    fn scan(&self, input: &str) -> Result<ScanOutcome<Self::Fragment>, ScanError>;
}

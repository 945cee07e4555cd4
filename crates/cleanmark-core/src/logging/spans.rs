//! Span definitions for outcome operations.
//!
//! Spans carry timing metadata only. Markup and diagnostic text are never
//! recorded.

/// Create the span wrapping one clean markup production.
#[macro_export]
macro_rules! markup_span {
    ($scan_start:expr, $diagnostic_count:expr) => {
        tracing::debug_span!(
            "cleanmark.outcome.markup",
            scan_start = $scan_start,
            diagnostic_count = $diagnostic_count
        )
    };
}

/// Create the span wrapping outcome construction.
#[macro_export]
macro_rules! construct_span {
    ($scan_start:expr) => {
        tracing::debug_span!("cleanmark.outcome.construct", scan_start = $scan_start)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MARKUP: &str = "cleanmark.outcome.markup";
    pub const CONSTRUCT: &str = "cleanmark.outcome.construct";
}

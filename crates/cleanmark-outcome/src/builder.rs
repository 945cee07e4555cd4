//! Fail-fast builder for [`ScanOutcome`].

use std::fmt;
use std::sync::Arc;

use cleanmark_core::clock::{Clock, SystemClock};
use cleanmark_core::config::TimingConfig;
use cleanmark_core::errors::OutcomeError;
use cleanmark_core::traits::{FixedMarkup, MarkupProducer};

use crate::diagnostics::Diagnostics;
use crate::outcome::ScanOutcome;

/// Collects the pieces of a scan outcome before it is frozen.
///
/// The builder has no read accessors, so an incomplete outcome can never be
/// mistaken for a finished one. [`build`](Self::build) fails when the scan
/// start, the markup source, or the diagnostics were never supplied. An
/// empty diagnostics list is fine; a missing one is not.
pub struct ScanOutcomeBuilder<F> {
    scan_start: Option<i64>,
    clean_markup: Option<Box<dyn MarkupProducer>>,
    clean_fragment: Option<Arc<F>>,
    diagnostics: Option<Diagnostics>,
    clock: Arc<dyn Clock>,
    timing: TimingConfig,
}

impl<F> ScanOutcomeBuilder<F> {
    pub fn new() -> Self {
        Self {
            scan_start: None,
            clean_markup: None,
            clean_fragment: None,
            diagnostics: None,
            clock: Arc::new(SystemClock),
            timing: TimingConfig::default(),
        }
    }

    /// When scanning began, in milliseconds since the Unix epoch.
    pub fn scan_start(mut self, scan_start: i64) -> Self {
        self.scan_start = Some(scan_start);
        self
    }

    /// Markup that was already serialized. Replaces any earlier producer.
    pub fn markup(mut self, markup: impl Into<String>) -> Self {
        self.clean_markup = Some(Box::new(FixedMarkup::new(markup)));
        self
    }

    /// A deferred markup producer. Replaces any earlier markup.
    pub fn producer<P: MarkupProducer + 'static>(mut self, producer: P) -> Self {
        self.clean_markup = Some(Box::new(producer));
        self
    }

    pub fn fragment(mut self, fragment: Arc<F>) -> Self {
        self.clean_fragment = Some(fragment);
        self
    }

    /// Diagnostics are copied here; later changes to the source never reach
    /// the outcome.
    pub fn diagnostics<I, S>(mut self, diagnostics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diagnostics = Some(diagnostics.into_iter().collect());
        self
    }

    /// Clock read once by `build` to compute elapsed time.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Freeze the outcome, stamping elapsed time from the configured clock.
    pub fn build(self) -> Result<ScanOutcome<F>, OutcomeError> {
        let scan_start = self
            .scan_start
            .ok_or(OutcomeError::MissingField { field: "scan_start" })?;
        let clean_markup = self
            .clean_markup
            .ok_or(OutcomeError::MissingField {
                field: "clean_markup",
            })?;
        let diagnostics = self
            .diagnostics
            .ok_or(OutcomeError::MissingField {
                field: "diagnostics",
            })?;

        Ok(ScanOutcome::assemble(
            scan_start,
            clean_markup,
            self.clean_fragment,
            diagnostics,
            self.clock.as_ref(),
            &self.timing,
        ))
    }
}

impl<F> Default for ScanOutcomeBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for ScanOutcomeBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanOutcomeBuilder")
            .field("scan_start", &self.scan_start)
            .field("has_markup", &self.clean_markup.is_some())
            .field("has_fragment", &self.clean_fragment.is_some())
            .field("diagnostics", &self.diagnostics.as_ref().map(Diagnostics::len))
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

//! The scan outcome value object.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use cleanmark_core::clock::{Clock, SystemClock};
use cleanmark_core::config::TimingConfig;
use cleanmark_core::constants::MILLIS_PER_SECOND;
use cleanmark_core::errors::OutcomeError;
use cleanmark_core::traits::{FixedMarkup, MarkupProducer};
use cleanmark_core::{construct_span, markup_span};

use crate::builder::ScanOutcomeBuilder;
use crate::diagnostics::Diagnostics;
use crate::summary::ScanSummary;

/// The result of one scan: clean markup, an optional parsed fragment of it,
/// diagnostics, and timing.
///
/// Built once by the sanitizer engine when the scan completes and read-only
/// afterwards. `F` is the engine's fragment type.
///
/// # Trust
///
/// [`clean_markup`](Self::clean_markup) is the ONLY output that is safe to
/// emit. [`diagnostics`](Self::diagnostics) and
/// [`diagnostic_count`](Self::diagnostic_count) help explain why input did
/// not meet policy; a count of zero does NOT mean the input was free of
/// attacks.
pub struct ScanOutcome<F> {
    clean_markup: Box<dyn MarkupProducer>,
    clean_fragment: Option<Arc<F>>,
    diagnostics: Diagnostics,
    /// Milliseconds since the Unix epoch.
    scan_start: i64,
    elapsed_ms: u64,
}

impl<F> ScanOutcome<F> {
    /// Build an outcome from markup that was already serialized.
    ///
    /// `scan_start` is when scanning began, not when this value is built.
    pub fn from_markup<I, S>(
        scan_start: i64,
        markup: impl Into<String>,
        fragment: Option<Arc<F>>,
        diagnostics: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_producer(scan_start, FixedMarkup::new(markup), fragment, diagnostics)
    }

    /// Build an outcome whose clean markup is computed on demand by `producer`.
    pub fn from_producer<P, I, S>(
        scan_start: i64,
        producer: P,
        fragment: Option<Arc<F>>,
        diagnostics: I,
    ) -> Self
    where
        P: MarkupProducer + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::assemble(
            scan_start,
            Box::new(producer),
            fragment,
            diagnostics.into_iter().collect(),
            &SystemClock,
            &TimingConfig::default(),
        )
    }

    /// Start a builder, for callers that inject a clock or timing config.
    pub fn builder() -> ScanOutcomeBuilder<F> {
        ScanOutcomeBuilder::new()
    }

    /// Canonical constructor. The clock is read exactly once here.
    pub(crate) fn assemble(
        scan_start: i64,
        clean_markup: Box<dyn MarkupProducer>,
        clean_fragment: Option<Arc<F>>,
        diagnostics: Diagnostics,
        clock: &dyn Clock,
        timing: &TimingConfig,
    ) -> Self {
        let _span = construct_span!(scan_start).entered();

        let now = clock.now_millis();
        let elapsed_ms = elapsed_between(scan_start, now);

        if now < scan_start && timing.effective_warn_on_clock_skew() {
            tracing::warn!(
                scan_start,
                now,
                "clock reads earlier than scan start, elapsed clamped to 0"
            );
        }
        let threshold_ms = timing.effective_slow_scan_threshold_ms();
        if elapsed_ms > threshold_ms {
            tracing::warn!(elapsed_ms, threshold_ms, "slow scan");
        }
        tracing::debug!(
            scan_start,
            elapsed_ms,
            diagnostic_count = diagnostics.len(),
            has_fragment = clean_fragment.is_some(),
            "scan outcome constructed"
        );

        Self {
            clean_markup,
            clean_fragment,
            diagnostics,
            scan_start,
            elapsed_ms,
        }
    }

    /// The sanitized markup. This is the only value here that is safe to
    /// emit to a browser or renderer.
    ///
    /// Every call invokes the deferred producer; nothing is cached. If the
    /// producer fails the error is returned with the original cause as its
    /// source, and no partial or empty string is ever substituted.
    pub fn clean_markup(&self) -> Result<String, OutcomeError> {
        let _span = markup_span!(self.scan_start, self.diagnostics.len()).entered();

        self.clean_markup.produce().map_err(|source| {
            tracing::error!(error = %source, "clean markup production failed");
            OutcomeError::MarkupProduction { source }
        })
    }

    /// Parsed fragment of the clean markup. May be `None` even when markup
    /// is available.
    pub fn clean_fragment(&self) -> Option<&F> {
        self.clean_fragment.as_deref()
    }

    /// Shared handle to the fragment, for callers that outlive this outcome.
    pub fn shared_fragment(&self) -> Option<Arc<F>> {
        self.clean_fragment.clone()
    }

    /// Diagnostics recorded during the scan.
    ///
    /// An empty list does NOT mean the input was safe. Use
    /// [`clean_markup`](Self::clean_markup) for output.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Number of diagnostics. Zero does NOT mean the input was safe.
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Scan duration in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_ms as f64 / MILLIS_PER_SECOND
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_ms
    }

    /// When the scan started, in milliseconds since the Unix epoch.
    pub fn scan_start(&self) -> i64 {
        self.scan_start
    }

    /// When the scan started, or `None` if outside chrono's range.
    pub fn scan_started_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.scan_start)
    }

    /// Audit snapshot of timing and diagnostics. Never contains markup.
    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            scan_start: self.scan_start,
            scan_started_at: self.scan_started_at(),
            elapsed_ms: self.elapsed_ms,
            elapsed_seconds: self.elapsed_seconds(),
            diagnostics: self.diagnostics.to_vec(),
            has_fragment: self.clean_fragment.is_some(),
        }
    }
}

impl<F> fmt::Debug for ScanOutcome<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanOutcome")
            .field("scan_start", &self.scan_start)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("diagnostic_count", &self.diagnostics.len())
            .field("has_fragment", &self.clean_fragment.is_some())
            .finish_non_exhaustive()
    }
}

/// `now - scan_start`, clamped at zero.
fn elapsed_between(scan_start: i64, now: i64) -> u64 {
    u64::try_from(now.saturating_sub(scan_start)).unwrap_or(0)
}

//! Scan timing configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Thresholds applied when an outcome stamps its elapsed scan time.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    /// Elapsed time above which outcome construction logs a slow-scan warning.
    /// Default: 5000.
    pub slow_scan_threshold_ms: Option<u64>,
    /// Log a warning when the clock reads earlier than the scan start.
    /// Default: true.
    pub warn_on_clock_skew: Option<bool>,
}

impl TimingConfig {
    pub fn effective_slow_scan_threshold_ms(&self) -> u64 {
        self.slow_scan_threshold_ms
            .unwrap_or(constants::DEFAULT_SLOW_SCAN_THRESHOLD_MS)
    }

    pub fn effective_warn_on_clock_skew(&self) -> bool {
        self.warn_on_clock_skew
            .unwrap_or(constants::DEFAULT_WARN_ON_CLOCK_SKEW)
    }
}

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Serializable audit snapshot of a scan outcome.
///
/// Carries timing and diagnostics only. Clean markup is intentionally absent:
/// a summary is a record of the scan, never a source of output.
///
/// A summary is a detached copy. Editing it never touches the outcome it came
/// from. The diagnostic count is not stored: it is always derived from
/// `diagnostics`, and any `diagnostic_count` key in deserialized input is
/// ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScanSummary {
    /// Milliseconds since the Unix epoch.
    pub scan_start: i64,
    #[serde(default)]
    pub scan_started_at: Option<DateTime<Utc>>,
    pub elapsed_ms: u64,
    pub elapsed_seconds: f64,
    pub diagnostics: Vec<String>,
    pub has_fragment: bool,
}

impl ScanSummary {
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.len()
    }
}

impl Serialize for ScanSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScanSummary", 7)?;
        state.serialize_field("scan_start", &self.scan_start)?;
        match self.scan_started_at {
            Some(ref started_at) => state.serialize_field("scan_started_at", started_at)?,
            None => state.skip_field("scan_started_at")?,
        }
        state.serialize_field("elapsed_ms", &self.elapsed_ms)?;
        state.serialize_field("elapsed_seconds", &self.elapsed_seconds)?;
        state.serialize_field("diagnostic_count", &self.diagnostic_count())?;
        state.serialize_field("diagnostics", &self.diagnostics)?;
        state.serialize_field("has_fragment", &self.has_fragment)?;
        state.end()
    }
}

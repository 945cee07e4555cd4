#![allow(dead_code)]

use std::sync::Arc;

use cleanmark_core::clock::{Clock, FixedClock};
use cleanmark_core::errors::ScanError;
use cleanmark_outcome::{SanitizerEngine, ScanOutcome};

/// Stand-in for an engine's parsed tree.
#[derive(Debug, PartialEq, Eq)]
pub struct TestFragment {
    pub nodes: Vec<String>,
}

impl TestFragment {
    pub fn single(node: &str) -> Arc<Self> {
        Arc::new(Self {
            nodes: vec![node.to_string()],
        })
    }
}

/// Toy engine: silently drops `<script>` blocks and reports `<blink>` tags.
///
/// Script removal produces no diagnostic, which mirrors how a real
/// serialize round trip loses attacks without noticing them.
pub struct ToyEngine {
    pub clock: Arc<FixedClock>,
    pub scan_cost_ms: i64,
    pub max_input_len: usize,
}

impl ToyEngine {
    pub fn new(clock: Arc<FixedClock>) -> Self {
        Self {
            clock,
            scan_cost_ms: 3,
            max_input_len: 4096,
        }
    }
}

impl SanitizerEngine for ToyEngine {
    type Fragment = TestFragment;

    fn scan(&self, input: &str) -> Result<ScanOutcome<TestFragment>, ScanError> {
        if input.len() > self.max_input_len {
            return Err(ScanError::InputRejected {
                reason: format!("input exceeds {} bytes", self.max_input_len),
            });
        }

        let scan_start = self.clock.now_millis();
        let mut diagnostics = Vec::new();

        let mut cleaned = strip_blocks(input, "<script", "</script>");
        if cleaned.contains("<blink>") {
            diagnostics.push("The blink tag is not allowed and was removed".to_string());
            cleaned = cleaned.replace("<blink>", "").replace("</blink>", "");
        }
        self.clock.advance(self.scan_cost_ms);

        let fragment = Arc::new(TestFragment {
            nodes: vec![cleaned.clone()],
        });
        let outcome = ScanOutcome::builder()
            .scan_start(scan_start)
            .markup(cleaned)
            .fragment(fragment)
            .diagnostics(diagnostics)
            .clock(self.clock.clone())
            .build()?;
        Ok(outcome)
    }
}

fn strip_blocks(input: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find(open) {
        out.push_str(&rest[..start]);
        match rest[start..].find(close) {
            Some(end) => rest = &rest[start + end + close.len()..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

/// One tracing event or span creation seen by [`capture_logs`].
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: tracing::Level,
    pub is_span: bool,
    pub fields: Vec<(String, String)>,
}

impl CapturedRecord {
    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct FieldCollector(Vec<(String, String)>);

impl tracing::field::Visit for FieldCollector {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

struct CaptureLayer {
    records: Arc<std::sync::Mutex<Vec<CapturedRecord>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut collector = FieldCollector::default();
        attrs.record(&mut collector);
        self.records.lock().unwrap().push(CapturedRecord {
            level: *attrs.metadata().level(),
            is_span: true,
            fields: collector.0,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut collector = FieldCollector::default();
        event.record(&mut collector);
        self.records.lock().unwrap().push(CapturedRecord {
            level: *event.metadata().level(),
            is_span: false,
            fields: collector.0,
        });
    }
}

/// Run `f` under a scoped subscriber and return everything it logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<CapturedRecord>) {
    use tracing_subscriber::layer::SubscriberExt;

    let records = Arc::new(std::sync::Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        records: records.clone(),
    });
    let value = tracing::subscriber::with_default(subscriber, f);
    let captured = records.lock().unwrap().clone();
    (value, captured)
}

/// Events at `level` whose message contains `needle`.
pub fn events_matching<'a>(
    records: &'a [CapturedRecord],
    level: tracing::Level,
    needle: &str,
) -> Vec<&'a CapturedRecord> {
    records
        .iter()
        .filter(|r| !r.is_span && r.level == level)
        .filter(|r| r.message().is_some_and(|m| m.contains(needle)))
        .collect()
}

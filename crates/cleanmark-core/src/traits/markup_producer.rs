use crate::errors::ProducerError;

/// Deferred producer of the clean markup string.
///
/// Invoked synchronously each time a caller asks for the clean markup, so an
/// expensive serialization can be skipped entirely if nobody asks. Producers
/// must be pure functions of state they captured at construction: the outcome
/// may call them repeatedly and from several threads at once.
///
/// Any closure `Fn() -> Result<String, ProducerError> + Send + Sync` is a
/// producer.
pub trait MarkupProducer: Send + Sync {
    /// Compute the clean markup.
    fn produce(&self) -> Result<String, ProducerError>;
}

impl<F> MarkupProducer for F
where
    F: Fn() -> Result<String, ProducerError> + Send + Sync,
{
    fn produce(&self) -> Result<String, ProducerError> {
        self()
    }
}

/// A producer over markup that was already serialized during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMarkup {
    markup: String,
}

impl FixedMarkup {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

impl MarkupProducer for FixedMarkup {
    fn produce(&self) -> Result<String, ProducerError> {
        Ok(self.markup.clone())
    }
}

//! Trait seams between the sanitizer engine and the outcome contract.

pub mod markup_producer;

pub use markup_producer::{FixedMarkup, MarkupProducer};

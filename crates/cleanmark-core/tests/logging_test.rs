use cleanmark_core::config::LoggingConfig;
use cleanmark_core::logging::{init_tracing, spans};

#[test]
fn init_tracing_is_idempotent() {
    let config = LoggingConfig {
        level: Some("debug".to_string()),
        json: Some(true),
    };
    init_tracing(&config);
    init_tracing(&LoggingConfig::default());
    tracing::info!("subscriber installed once");
}

#[test]
fn span_macros_use_published_names() {
    tracing::subscriber::with_default(tracing_subscriber::registry(), || {
        let markup = cleanmark_core::markup_span!(0i64, 3usize);
        let construct = cleanmark_core::construct_span!(0i64);

        let markup_meta = markup.metadata().expect("markup span enabled");
        let construct_meta = construct.metadata().expect("construct span enabled");
        assert_eq!(markup_meta.name(), spans::names::MARKUP);
        assert_eq!(construct_meta.name(), spans::names::CONSTRUCT);
    });
}

//! Configuration system for cleanmark.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod cleanmark_config;
pub mod logging_config;
pub mod timing_config;

pub use cleanmark_config::{CleanmarkConfig, ConfigOverrides};
pub use logging_config::LoggingConfig;
pub use timing_config::TimingConfig;

// Single source of truth for compiled defaults.

// --- Timing ---
pub const MILLIS_PER_SECOND: f64 = 1000.0;
pub const DEFAULT_SLOW_SCAN_THRESHOLD_MS: u64 = 5_000;
pub const DEFAULT_WARN_ON_CLOCK_SKEW: bool = true;

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
pub const LOG_ENV_VAR: &str = "CLEANMARK_LOG";
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// --- Config files ---
pub const PROJECT_CONFIG_FILENAME: &str = "cleanmark.toml";

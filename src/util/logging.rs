//! `tracing` subscriber setup for ikilog's own diagnostics
//!
//! The tagged records themselves go to the logger's sinks. This module only
//! covers what the crate says about itself (why an event was dropped, which
//! sinks a logger was built with) and the `crash_report` events emitted by
//! [`TracingCrashReporter`](crate::TracingCrashReporter).
//!
//! Diagnostics are written to stderr so they never interleave with records
//! printed on stdout.
//!
//! # Example
//!
//! ```no_run
//! use ikilog::util::logging;
//!
//! // With environment: IKILOG_LOG_LEVEL=trace
//! logging::init_from_env();
//! ```

use crate::sink::CRASH_REPORT_TARGET;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Configuration for subscriber initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for the `ikilog` target
    pub level: Level,

    /// JSON lines instead of human-readable output
    pub use_json: bool,

    /// Include the event target (e.g. `ikilog::logger`)
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Filter directives implied by this configuration. Used when `RUST_LOG`
    /// is unset.
    pub fn directives(&self) -> Vec<String> {
        vec![
            format!("{}={}", crate::NAME, self.level.as_str().to_lowercase()),
            crash_report_directive(),
        ]
    }

    /// Builds the subscriber filter. `rust_log` replaces the configured level
    /// directives; the `crash_report` target stays enabled either way.
    pub fn env_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        let filter = match rust_log {
            Some(spec) => EnvFilter::new(spec),
            None => self
                .directives()
                .iter()
                .filter_map(|d| d.parse::<Directive>().ok())
                .fold(EnvFilter::new(""), |filter, d| filter.add_directive(d)),
        };

        match crash_report_directive().parse::<Directive>() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    }
}

/// Directive that lets every `crash_report` event through.
pub fn crash_report_directive() -> String {
    format!("{}=info", CRASH_REPORT_TARGET)
}

/// Parses a log level from a string, falling back to WARN.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = env::var("RUST_LOG").ok();
        let filter = config.env_filter(rust_log.as_deref());

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initializes from `IKILOG_LOG_LEVEL` and `IKILOG_LOG_JSON`.
pub fn init_from_env() {
    let level_str = env::var("IKILOG_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let level = parse_level(&level_str);

    let use_json = env::var("IKILOG_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    init_logging(LoggingConfig {
        level,
        use_json,
        ..Default::default()
    });
}

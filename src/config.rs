//! Logger configuration
//!
//! [`LoggerConfig`] replaces a handful of process-wide flags with a value that
//! is handed to a [`TaggedLogger`](crate::TaggedLogger) at construction. It can
//! be built from defaults, from environment variables, or from a TOML file.
//!
//! # Environment Variables
//!
//! - `IKILOG_ENABLED`: Master switch (true|false) - default: "true"
//! - `IKILOG_SUPPRESS_BEFORE`: Cutoff date, `yyyy-MMM-dd` - default: "2000-Jan-01"
//! - `IKILOG_PREFIX`: Line prefix - default: "ikiApps"
//! - `IKILOG_USE_COLOR`: Print tag glyphs (true|false) - default: "false"
//! - `IKILOG_CRASH_REPORTING`: Activate the crash-reporting sink (true|false) - default: "false"
//! - `IKILOG_CRASH_ROUTING`: `mirror` (console + crash reporter) or `replace` - default: "mirror"
//! - `IKILOG_MISSING_DATE`: `drop` or `emit` for calls without a date - default: "drop"
//!
//! # Example
//!
//! ```
//! use ikilog::LoggerConfig;
//!
//! let config = LoggerConfig::from_toml_str(
//!     r#"
//!     suppress_before_date = "2016-Jan-01"
//!     use_color = true
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.enabled);
//! assert_eq!(config.prefix, "ikiApps");
//! ```

use crate::date::{parse_date, DateError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

const DEFAULT_ENABLED: bool = true;
const DEFAULT_SUPPRESS_BEFORE_DATE: &str = "2000-Jan-01";
const DEFAULT_PREFIX: &str = "ikiApps";
const DEFAULT_USE_COLOR: bool = false;
const DEFAULT_CRASH_REPORTING_ACTIVE: bool = false;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The cutoff date does not match `yyyy-MMM-dd`
    #[error("Invalid suppress_before_date: {0}")]
    InvalidDate(#[from] DateError),

    /// Failed to parse a configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },

    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// What to do with a call that carries no date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDatePolicy {
    /// Drop the event for every tag, critical included
    #[default]
    Drop,
    /// Treat the event as current: it passes the cutoff for every tag
    Emit,
}

/// Where records go once crash reporting is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrashRouting {
    /// Console and crash reporter both receive each record
    #[default]
    Mirror,
    /// Only the crash reporter receives records
    Replace,
}

impl MissingDatePolicy {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "drop" => Some(Self::Drop),
            "emit" => Some(Self::Emit),
            _ => None,
        }
    }
}

impl CrashRouting {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mirror" => Some(Self::Mirror),
            "replace" => Some(Self::Replace),
            _ => None,
        }
    }
}

/// Settings read on every log call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Master on/off switch
    pub enabled: bool,

    /// Non-critical events dated on or before this `yyyy-MMM-dd` date are dropped
    pub suppress_before_date: String,

    /// Text prepended to every emitted line
    pub prefix: String,

    /// Include the tag glyph in output
    pub use_color: bool,

    /// Route records to the crash-reporting sink
    pub crash_reporting_active: bool,

    pub crash_routing: CrashRouting,

    pub missing_date: MissingDatePolicy,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            suppress_before_date: DEFAULT_SUPPRESS_BEFORE_DATE.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            use_color: DEFAULT_USE_COLOR,
            crash_reporting_active: DEFAULT_CRASH_REPORTING_ACTIVE,
            crash_routing: CrashRouting::default(),
            missing_date: MissingDatePolicy::default(),
        }
    }
}

impl LoggerConfig {
    /// Defaults overlaid with `IKILOG_*` environment variables.
    ///
    /// Values that fail to parse are ignored with a warning and the default
    /// is kept; logging configuration should never stop a program from
    /// starting.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(enabled) = env_bool("IKILOG_ENABLED") {
            config.enabled = enabled;
        }
        if let Ok(date) = env::var("IKILOG_SUPPRESS_BEFORE") {
            config.suppress_before_date = date;
        }
        if let Ok(prefix) = env::var("IKILOG_PREFIX") {
            config.prefix = prefix;
        }
        if let Some(use_color) = env_bool("IKILOG_USE_COLOR") {
            config.use_color = use_color;
        }
        if let Some(active) = env_bool("IKILOG_CRASH_REPORTING") {
            config.crash_reporting_active = active;
        }
        if let Ok(value) = env::var("IKILOG_CRASH_ROUTING") {
            match CrashRouting::parse(&value) {
                Some(routing) => config.crash_routing = routing,
                None => warn!("Ignoring IKILOG_CRASH_ROUTING={:?}: expected mirror|replace", value),
            }
        }
        if let Ok(value) = env::var("IKILOG_MISSING_DATE") {
            match MissingDatePolicy::parse(&value) {
                Some(policy) => config.missing_date = policy,
                None => warn!("Ignoring IKILOG_MISSING_DATE={:?}: expected drop|emit", value),
            }
        }

        config
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Checks that the cutoff date parses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_date(&self.suppress_before_date)?;
        Ok(())
    }
}

fn env_bool(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    match parse_bool(key, &value) {
        Ok(b) => Some(b),
        Err(e) => {
            warn!("Ignoring {}: {}", key, e);
            None
        }
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::ParseError {
            field: field.to_string(),
            error: format!("'{}' is not a boolean", value),
        }),
    }
}

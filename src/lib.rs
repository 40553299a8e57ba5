//! ikilog - tagged debug logging with a date-based suppression cutoff
//!
//! Each log call carries a color tag, the date the call was written, and the
//! call site. Calls dated on or before a configured cutoff are dropped, which
//! lets old debug statements go quiet without deleting them. Critical calls
//! always get through.
//!
//! # Core Concepts
//!
//! - **Tag**: [`ColorTag`] picks the glyph shown in colored output;
//!   [`ColorTag::Critical`] also bypasses the cutoff
//! - **Cutoff**: [`LoggerConfig::suppress_before_date`], in `yyyy-MMM-dd` form
//! - **Sink**: where formatted records go ([`ConsoleSink`],
//!   [`CrashReportingSink`], [`NullSink`], [`MemorySink`])
//!
//! # Example Usage
//!
//! ```
//! use ikilog::{log, log_critical, LoggerConfig, TaggedLogger};
//!
//! let logger = TaggedLogger::new(LoggerConfig {
//!     suppress_before_date: "2016-Jan-01".to_string(),
//!     use_color: true,
//!     ..Default::default()
//! });
//!
//! log!(logger, "session restored", "2016-Jul-28"); // printed
//! log!(logger, "old investigation", "2015-Mar-02"); // dropped
//! log_critical!(logger, "token expired", "1999-Jan-01"); // printed
//! ```
//!
//! # Project Structure
//!
//! - [`logger`]: filter, formatting and the per-tag operations
//! - [`config`]: configuration from defaults, environment or TOML
//! - [`sink`]: output destinations
//! - [`util`]: `tracing` subscriber setup for the crate's own diagnostics

pub mod cli;
pub mod config;
pub mod date;
pub mod event;
pub mod logger;
pub mod macros;
pub mod sink;
pub mod tag;
pub mod util;

pub use config::{ConfigError, CrashRouting, LoggerConfig, MissingDatePolicy};
pub use date::{parse_date, DateError, DATE_FORMAT};
pub use event::{CallSite, LogEvent};
pub use logger::{DropReason, TaggedLogger};
pub use macros::OptionalStr;
pub use sink::{
    ConsoleSink, ConsoleStream, CrashReporter, CrashReportingSink, LogSink, MemorySink, NullSink,
    TracingCrashReporter,
};
pub use tag::{ColorTag, ParseTagError};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

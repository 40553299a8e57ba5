//! The tagged logger
//!
//! Every public logging operation funnels into [`TaggedLogger::emit`], which
//! runs a stateless filter over the current [`LoggerConfig`] and the call's
//! arguments, formats the surviving message one record per line, and writes
//! those records to the sinks picked at construction.
//!
//! Nothing here returns an error to the caller. A missing message, a
//! disabled logger, an unparseable date and a date on or before the cutoff
//! all end up as a silent drop, traced at `trace` level with the reason.
//!
//! # Example
//!
//! ```
//! use ikilog::{LoggerConfig, MemorySink, TaggedLogger};
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let config = LoggerConfig {
//!     suppress_before_date: "2016-Jan-01".to_string(),
//!     ..Default::default()
//! };
//! let logger = TaggedLogger::with_sinks(config, vec![Arc::new(sink.clone())]);
//!
//! ikilog::log!(logger, "hello", "2016-Jul-28");
//! ikilog::log!(logger, "hello", "2015-Jan-01");
//!
//! assert_eq!(sink.len(), 1);
//! ```

use crate::config::{CrashRouting, LoggerConfig, MissingDatePolicy};
use crate::date::{parse_date, DateError};
use crate::event::{CallSite, LogEvent};
use crate::sink::{
    ConsoleSink, CrashReporter, CrashReportingSink, LogSink, NullSink, TracingCrashReporter,
};
use crate::tag::ColorTag;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::{debug, trace};

/// Why an event was not emitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropReason {
    #[error("no message")]
    NoMessage,

    #[error("logging disabled")]
    Disabled,

    #[error("no date given")]
    MissingDate,

    #[error("unparseable event date '{0}'")]
    InvalidDate(String),

    #[error("unparseable cutoff date '{0}'")]
    InvalidCutoff(String),

    #[error("dated {date}, not after cutoff {cutoff}")]
    BeforeCutoff { date: String, cutoff: String },
}

/// Decides whether `event` passes the filter under `config`.
pub fn admit(config: &LoggerConfig, event: &LogEvent<'_>) -> Result<(), DropReason> {
    if event.message.is_none() {
        return Err(DropReason::NoMessage);
    }
    if !config.enabled {
        return Err(DropReason::Disabled);
    }

    let date = match (event.date, config.missing_date) {
        (Some(date), _) => date,
        (None, MissingDatePolicy::Emit) => return Ok(()),
        (None, MissingDatePolicy::Drop) => return Err(DropReason::MissingDate),
    };

    if event.tag.bypasses_cutoff() {
        return Ok(());
    }

    let event_date =
        parse_date(date).map_err(|DateError { input }| DropReason::InvalidDate(input))?;
    let cutoff = parse_date(&config.suppress_before_date)
        .map_err(|DateError { input }| DropReason::InvalidCutoff(input))?;

    if event_date > cutoff {
        Ok(())
    } else {
        Err(DropReason::BeforeCutoff {
            date: date.to_string(),
            cutoff: config.suppress_before_date.clone(),
        })
    }
}

/// Formats one line of text into a record.
///
/// `<prefix> [<glyph> ]-[<file>:<line>] <function> - <text>`
pub fn format_record(
    config: &LoggerConfig,
    tag: ColorTag,
    site: &CallSite<'_>,
    text: &str,
) -> String {
    if config.use_color {
        format!(
            "{} {} -[{}:{}] {} - {}",
            config.prefix,
            tag.glyph(),
            site.basename(),
            site.line,
            site.function,
            text
        )
    } else {
        format!(
            "{} -[{}:{}] {} - {}",
            config.prefix,
            site.basename(),
            site.line,
            site.function,
            text
        )
    }
}

/// Splits a message into physical lines. `\r\n` counts as one break.
pub fn message_lines(message: &str) -> impl Iterator<Item = &str> {
    message
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Filter-and-format logger writing to a fixed set of sinks
pub struct TaggedLogger {
    config: RwLock<LoggerConfig>,
    sinks: Vec<Arc<dyn LogSink>>,
}

impl TaggedLogger {
    /// Console logger, plus the `tracing`-backed crash reporter when
    /// `crash_reporting_active` is set.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_crash_reporter(config, Arc::new(TracingCrashReporter))
    }

    /// Like [`TaggedLogger::new`] with a caller-supplied crash reporter.
    pub fn with_crash_reporter(config: LoggerConfig, reporter: Arc<dyn CrashReporter>) -> Self {
        let mut sinks: Vec<Arc<dyn LogSink>> = Vec::new();

        if config.crash_reporting_active {
            if config.crash_routing == CrashRouting::Mirror {
                sinks.push(Arc::new(ConsoleSink::stdout()));
            }
            sinks.push(Arc::new(CrashReportingSink::new(reporter)));
        } else {
            sinks.push(Arc::new(ConsoleSink::stdout()));
        }

        Self::with_sinks(config, sinks)
    }

    /// Logger writing to exactly `sinks`. `crash_reporting_active` and
    /// `crash_routing` are not consulted.
    pub fn with_sinks(config: LoggerConfig, sinks: Vec<Arc<dyn LogSink>>) -> Self {
        debug!(
            sinks = ?sinks.iter().map(|s| s.name()).collect::<Vec<_>>(),
            enabled = config.enabled,
            cutoff = %config.suppress_before_date,
            "Tagged logger created"
        );
        Self {
            config: RwLock::new(config),
            sinks,
        }
    }

    /// Logger that writes nowhere
    pub fn disabled() -> Self {
        let config = LoggerConfig {
            enabled: false,
            ..Default::default()
        };
        Self::with_sinks(config, vec![Arc::new(NullSink)])
    }

    pub fn sink_names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.config
            .read()
            .map(|config| config.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Applies `f` to the live configuration.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut LoggerConfig),
    {
        let mut config = self
            .config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut config);
    }

    pub fn is_enabled(&self) -> bool {
        self.config().enabled
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.update(|c| c.enabled = enabled);
    }

    /// Sets the cutoff. An unparseable date is rejected and the old cutoff kept.
    pub fn set_suppress_before_date(&self, date: &str) -> Result<(), DateError> {
        parse_date(date)?;
        self.update(|c| c.suppress_before_date = date.to_string());
        Ok(())
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        self.update(|c| c.prefix = prefix);
    }

    pub fn set_use_color(&self, use_color: bool) {
        self.update(|c| c.use_color = use_color);
    }

    pub fn set_missing_date(&self, policy: MissingDatePolicy) {
        self.update(|c| c.missing_date = policy);
    }

    /// Runs the filter without writing anything.
    pub fn check(&self, event: &LogEvent<'_>) -> Result<(), DropReason> {
        let config = self
            .config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        admit(&config, event)
    }

    /// Filters, formats and writes one event.
    pub fn emit(
        &self,
        tag: ColorTag,
        message: Option<&str>,
        date: Option<&str>,
        site: CallSite<'_>,
    ) {
        let event = LogEvent::new(tag, message, date, site);

        // Format under the read lock, write after releasing it so a sink may
        // call back into the logger.
        let records: Vec<String> = {
            let config = self
                .config
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            if let Err(reason) = admit(&config, &event) {
                trace!(
                    tag = %tag,
                    file = site.basename(),
                    line = site.line,
                    %reason,
                    "Dropped log event"
                );
                return;
            }

            let Some(message) = event.message else {
                return;
            };
            message_lines(message)
                .map(|line| format_record(&config, tag, &site, line))
                .collect()
        };

        for sink in &self.sinks {
            for record in &records {
                sink.write(record);
            }
        }
    }

    pub fn log(&self, message: Option<&str>, date: Option<&str>, site: CallSite<'_>) {
        self.emit(ColorTag::None, message, date, site);
    }

    pub fn log_critical(&self, message: Option<&str>, date: Option<&str>, site: CallSite<'_>) {
        self.emit(ColorTag::Critical, message, date, site);
    }

    pub fn log_important(&self, message: Option<&str>, date: Option<&str>, site: CallSite<'_>) {
        self.emit(ColorTag::Important, message, date, site);
    }

    pub fn log_highlighted(&self, message: Option<&str>, date: Option<&str>, site: CallSite<'_>) {
        self.emit(ColorTag::Highlighted, message, date, site);
    }

    pub fn log_reviewed(&self, message: Option<&str>, date: Option<&str>, site: CallSite<'_>) {
        self.emit(ColorTag::Reviewed, message, date, site);
    }

    pub fn log_valuable(&self, message: Option<&str>, date: Option<&str>, site: CallSite<'_>) {
        self.emit(ColorTag::Valuable, message, date, site);
    }

    pub fn log_to_be_reviewed(
        &self,
        message: Option<&str>,
        date: Option<&str>,
        site: CallSite<'_>,
    ) {
        self.emit(ColorTag::ToBeReviewed, message, date, site);
    }

    /// Not-important output, printed with the gray glyph
    pub fn log_gray(&self, message: Option<&str>, date: Option<&str>, site: CallSite<'_>) {
        self.emit(ColorTag::NotImportant, message, date, site);
    }

    // Verbose variants accept the same arguments and ignore them.

    pub fn verbose_log(
        &self,
        _message: Option<&str>,
        _date: Option<&str>,
        _site: CallSite<'_>,
    ) {
    }

    pub fn verbose_log_critical(
        &self,
        _message: Option<&str>,
        _date: Option<&str>,
        _site: CallSite<'_>,
    ) {
    }

    pub fn verbose_log_important(
        &self,
        _message: Option<&str>,
        _date: Option<&str>,
        _site: CallSite<'_>,
    ) {
    }

    pub fn verbose_log_highlighted(
        &self,
        _message: Option<&str>,
        _date: Option<&str>,
        _site: CallSite<'_>,
    ) {
    }

    pub fn verbose_log_reviewed(
        &self,
        _message: Option<&str>,
        _date: Option<&str>,
        _site: CallSite<'_>,
    ) {
    }

    pub fn verbose_log_valuable(
        &self,
        _message: Option<&str>,
        _date: Option<&str>,
        _site: CallSite<'_>,
    ) {
    }

    pub fn verbose_log_to_be_reviewed(
        &self,
        _message: Option<&str>,
        _date: Option<&str>,
        _site: CallSite<'_>,
    ) {
    }

    pub fn verbose_log_gray(
        &self,
        _message: Option<&str>,
        _date: Option<&str>,
        _site: CallSite<'_>,
    ) {
    }
}

impl Default for TaggedLogger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl std::fmt::Debug for TaggedLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggedLogger")
            .field("config", &self.config())
            .field("sinks", &self.sink_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    const SITE: CallSite<'static> = CallSite {
        file: "src/screens/home.rs",
        function: "render",
        line: 7,
    };

    fn event<'a>(tag: ColorTag, message: Option<&'a str>, date: Option<&'a str>) -> LogEvent<'a> {
        LogEvent::new(tag, message, date, SITE)
    }

    fn config_with_cutoff(cutoff: &str) -> LoggerConfig {
        LoggerConfig {
            suppress_before_date: cutoff.to_string(),
            ..Default::default()
        }
    }

    fn memory_logger(config: LoggerConfig) -> (TaggedLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = TaggedLogger::with_sinks(config, vec![Arc::new(sink.clone())]);
        (logger, sink)
    }

    #[test]
    fn test_admit_after_cutoff() {
        let config = config_with_cutoff("2016-Jan-01");
        assert_eq!(admit(&config, &event(ColorTag::None, Some("hi"), Some("2016-Jul-28"))), Ok(()));
    }

    #[test]
    fn test_admit_on_cutoff_is_dropped() {
        let config = config_with_cutoff("2016-Jan-01");
        assert_eq!(
            admit(&config, &event(ColorTag::Important, Some("hi"), Some("2016-Jan-01"))),
            Err(DropReason::BeforeCutoff {
                date: "2016-Jan-01".to_string(),
                cutoff: "2016-Jan-01".to_string(),
            })
        );
    }

    #[test]
    fn test_admit_order_message_before_enabled() {
        let config = LoggerConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(admit(&config, &event(ColorTag::None, None, Some("2016-Jul-28"))), Err(DropReason::NoMessage));
        assert_eq!(admit(&config, &event(ColorTag::None, Some("m"), Some("2016-Jul-28"))), Err(DropReason::Disabled));
    }

    #[test]
    fn test_admit_missing_date_drops_even_critical() {
        let config = LoggerConfig::default();
        assert_eq!(admit(&config, &event(ColorTag::Critical, Some("m"), None)), Err(DropReason::MissingDate));
    }

    #[test]
    fn test_admit_missing_date_emit_policy() {
        let config = LoggerConfig {
            missing_date: MissingDatePolicy::Emit,
            suppress_before_date: "2999-Dec-31".to_string(),
            ..Default::default()
        };
        assert_eq!(admit(&config, &event(ColorTag::Reviewed, Some("m"), None)), Ok(()));
    }

    #[test]
    fn test_admit_critical_ignores_bad_dates() {
        let config = config_with_cutoff("not a date");
        assert_eq!(admit(&config, &event(ColorTag::Critical, Some("m"), Some("garbage"))), Ok(()));
    }

    #[test]
    fn test_admit_invalid_event_date() {
        let config = LoggerConfig::default();
        assert_eq!(
            admit(&config, &event(ColorTag::Valuable, Some("m"), Some("2016/07/28"))),
            Err(DropReason::InvalidDate("2016/07/28".to_string()))
        );
    }

    #[test]
    fn test_admit_invalid_cutoff() {
        let config = config_with_cutoff("01-01-2000");
        assert_eq!(
            admit(&config, &event(ColorTag::Valuable, Some("m"), Some("2016-Jul-28"))),
            Err(DropReason::InvalidCutoff("01-01-2000".to_string()))
        );
    }

    #[test]
    fn test_format_record_plain() {
        let config = LoggerConfig::default();
        assert_eq!(
            format_record(&config, ColorTag::Critical, &SITE, "boom"),
            "ikiApps -[home.rs:7] render - boom"
        );
    }

    #[test]
    fn test_format_record_color() {
        let config = LoggerConfig {
            use_color: true,
            ..Default::default()
        };
        assert_eq!(
            format_record(&config, ColorTag::Critical, &SITE, "boom"),
            "ikiApps 🔴 -[home.rs:7] render - boom"
        );
    }

    #[test]
    fn test_message_lines() {
        assert_eq!(message_lines("a\nb\r\nc").collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(message_lines("").collect::<Vec<_>>(), vec![""]);
        assert_eq!(message_lines("x\n").collect::<Vec<_>>(), vec!["x", ""]);
    }

    #[test]
    fn test_emit_multiline() {
        let (logger, sink) = memory_logger(LoggerConfig::default());
        logger.log_highlighted(Some("one\ntwo\nthree"), Some("2016-Jul-28"), SITE);

        assert_eq!(
            sink.records(),
            vec![
                "ikiApps -[home.rs:7] render - one",
                "ikiApps -[home.rs:7] render - two",
                "ikiApps -[home.rs:7] render - three",
            ]
        );
    }

    #[test]
    fn test_emit_writes_to_every_sink() {
        let first = MemorySink::new();
        let second = MemorySink::new();
        let logger = TaggedLogger::with_sinks(
            LoggerConfig::default(),
            vec![Arc::new(first.clone()), Arc::new(second.clone())],
        );

        logger.log(Some("a\nb"), Some("2016-Jul-28"), SITE);

        assert_eq!(first.len(), 2);
        assert_eq!(first.records(), second.records());
    }

    #[test]
    fn test_runtime_toggle() {
        let (logger, sink) = memory_logger(LoggerConfig::default());
        logger.set_enabled(false);
        logger.log(Some("hidden"), Some("2016-Jul-28"), SITE);
        assert!(sink.is_empty());

        logger.set_enabled(true);
        logger.log(Some("shown"), Some("2016-Jul-28"), SITE);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_set_suppress_before_date_rejects_invalid() {
        let logger = TaggedLogger::disabled();
        assert!(logger.set_suppress_before_date("soon").is_err());
        assert_eq!(logger.config().suppress_before_date, "2000-Jan-01");

        logger.set_suppress_before_date("2020-Mar-15").unwrap();
        assert_eq!(logger.config().suppress_before_date, "2020-Mar-15");
    }

    #[test]
    fn test_setters() {
        let logger = TaggedLogger::disabled();
        logger.set_prefix("MyApp");
        logger.set_use_color(true);
        logger.set_missing_date(MissingDatePolicy::Emit);

        let config = logger.config();
        assert_eq!(config.prefix, "MyApp");
        assert!(config.use_color);
        assert_eq!(config.missing_date, MissingDatePolicy::Emit);
        assert!(!logger.is_enabled());
    }

    #[test]
    fn test_check_does_not_write() {
        let (logger, sink) = memory_logger(LoggerConfig::default());
        assert_eq!(logger.check(&event(ColorTag::None, Some("m"), Some("2016-Jul-28"))), Ok(()));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_verbose_variants_are_no_ops() {
        let (logger, sink) = memory_logger(LoggerConfig::default());
        let msg = Some("verbose");
        let date = Some("2016-Jul-28");

        logger.verbose_log(msg, date, SITE);
        logger.verbose_log_critical(msg, date, SITE);
        logger.verbose_log_important(msg, date, SITE);
        logger.verbose_log_highlighted(msg, date, SITE);
        logger.verbose_log_reviewed(msg, date, SITE);
        logger.verbose_log_valuable(msg, date, SITE);
        logger.verbose_log_to_be_reviewed(msg, date, SITE);
        logger.verbose_log_gray(msg, date, SITE);

        assert!(sink.is_empty());
    }

    #[test]
    fn test_sink_selection_console_only() {
        let logger = TaggedLogger::new(LoggerConfig::default());
        assert_eq!(logger.sink_names(), vec!["stdout"]);
    }

    #[test]
    fn test_sink_selection_crash_mirror() {
        let config = LoggerConfig {
            crash_reporting_active: true,
            ..Default::default()
        };
        assert_eq!(TaggedLogger::new(config).sink_names(), vec!["stdout", "crash_reporting"]);
    }

    #[test]
    fn test_sink_selection_crash_replace() {
        let config = LoggerConfig {
            crash_reporting_active: true,
            crash_routing: CrashRouting::Replace,
            ..Default::default()
        };
        assert_eq!(TaggedLogger::new(config).sink_names(), vec!["crash_reporting"]);
    }

    #[test]
    fn test_disabled_logger() {
        let logger = TaggedLogger::disabled();
        assert_eq!(logger.sink_names(), vec!["null"]);
        assert!(!logger.is_enabled());
    }

    #[test]
    fn test_debug_impl() {
        let debug_str = format!("{:?}", TaggedLogger::disabled());
        assert!(debug_str.contains("TaggedLogger"));
        assert!(debug_str.contains("null"));
    }
}

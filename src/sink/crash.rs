use super::LogSink;
use std::sync::Arc;

/// `tracing` target used by [`TracingCrashReporter`]
pub const CRASH_REPORT_TARGET: &str = "crash_report";

/// Log API of an external crash-reporting service.
///
/// Implementations receive one call per physical line, already formatted.
pub trait CrashReporter: Send + Sync {
    fn log(&self, record: &str);
}

/// Forwards records as `tracing` events under the [`CRASH_REPORT_TARGET`]
/// target. Whatever subscriber layer the application attaches for its crash
/// service picks them up from there.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCrashReporter;

impl CrashReporter for TracingCrashReporter {
    fn log(&self, record: &str) {
        tracing::info!(target: CRASH_REPORT_TARGET, "{}", record);
    }
}

/// Sink that hands records to a [`CrashReporter`]
#[derive(Clone)]
pub struct CrashReportingSink {
    reporter: Arc<dyn CrashReporter>,
}

impl CrashReportingSink {
    pub fn new(reporter: Arc<dyn CrashReporter>) -> Self {
        Self { reporter }
    }
}

impl Default for CrashReportingSink {
    fn default() -> Self {
        Self::new(Arc::new(TracingCrashReporter))
    }
}

impl std::fmt::Debug for CrashReportingSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrashReportingSink").finish_non_exhaustive()
    }
}

impl LogSink for CrashReportingSink {
    fn write(&self, record: &str) {
        self.reporter.log(record);
    }

    fn name(&self) -> &'static str {
        "crash_reporting"
    }
}

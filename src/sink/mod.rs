//! Destinations for formatted records
//!
//! A [`TaggedLogger`](crate::TaggedLogger) holds a list of sinks chosen at
//! construction time and hands each formatted line to every one of them.
//! Sinks never report failure back to the logger; a record that cannot be
//! written is lost.

mod console;
mod crash;

pub use console::{ConsoleSink, ConsoleStream};
pub use crash::{CrashReporter, CrashReportingSink, TracingCrashReporter, CRASH_REPORT_TARGET};

use std::sync::{Arc, Mutex};

/// Receives one formatted record per physical line of a message
pub trait LogSink: Send + Sync {
    fn write(&self, record: &str);

    /// Short identifier used in diagnostics
    fn name(&self) -> &'static str;
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _record: &str) {}

    fn name(&self) -> &'static str {
        "null"
    }
}

/// Keeps records in memory. Clones share the same buffer, so a test can keep
/// one handle and give the other to a logger.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far
    pub fn records(&self) -> Vec<String> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record.to_string());
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_accepts_anything() {
        let sink = NullSink;
        sink.write("dropped");
        assert_eq!(sink.name(), "null");
    }

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();

        sink.write("first");
        sink.write("second");

        assert_eq!(handle.records(), vec!["first", "second"]);
        assert_eq!(handle.len(), 2);

        handle.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_memory_sink_as_trait_object() {
        let sink = MemorySink::new();
        let boxed: Arc<dyn LogSink> = Arc::new(sink.clone());
        boxed.write("via trait");
        assert_eq!(sink.records(), vec!["via trait"]);
    }
}

use super::LogSink;
use std::io::{self, Write};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

/// Writes each record as one line on stdout or stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    pub fn new(stream: ConsoleStream) -> Self {
        Self { stream }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleStream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleStream::Stderr)
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, record: &str) {
        // Locking keeps each record on its own line when threads interleave.
        let result = match self.stream {
            ConsoleStream::Stdout => writeln!(io::stdout().lock(), "{}", record),
            ConsoleStream::Stderr => writeln!(io::stderr().lock(), "{}", record),
        };

        if let Err(e) = result {
            warn!("Failed to write log record to {:?}: {}", self.stream, e);
        }
    }

    fn name(&self) -> &'static str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }
}

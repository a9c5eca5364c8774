//! Destinations for access log lines.

use std::sync::{Mutex, PoisonError};

/// Tracing target used for access log lines.
pub const ACCESS_TARGET: &str = "slash_command_server::access";

/// Receives one fully rendered access log line per logged request.
pub trait LogSink: Send + Sync + 'static {
    fn emit(&self, line: &str);
}

/// Forwards lines to the tracing subscriber at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: ACCESS_TARGET, "{line}");
    }
}

/// Keeps lines in memory so callers can inspect what was logged.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line emitted so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain and return every line emitted so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl LogSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

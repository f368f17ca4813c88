//! Log sink trait and in-process implementations
//!
//! A log sink receives the plain-text progress lines of a harvest. Sinks are
//! best-effort: `append` cannot fail, and implementations that can hit I/O
//! errors swallow them.

use std::sync::Mutex;

/// Append-only destination for progress lines
pub trait LogSink: Send + Sync {
    /// Appends one line; implementations add the trailing newline
    fn append(&self, line: &str);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn append(&self, _line: &str) {}
}

/// Collects lines in memory, mainly for inspecting a run in tests
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line appended so far
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl LogSink for MemorySink {
    fn append(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

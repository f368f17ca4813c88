//! Plain-text backlog file
//!
//! Each `append` opens the file in append mode, writes one line and closes
//! it again, so the backlog is readable while a run is in progress.

use crate::output::traits::LogSink;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A log sink backed by a text file
#[derive(Debug, Clone)]
pub struct BacklogFile {
    path: PathBuf,
}

impl BacklogFile {
    /// Creates a sink that appends to `path`, creating the file on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the sink and empties any existing file at `path`
    pub fn truncated(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let backlog = Self::new(path);
        std::fs::File::create(&backlog.path)?;
        Ok(backlog)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}

impl LogSink for BacklogFile {
    fn append(&self, line: &str) {
        if let Err(e) = self.try_append(line) {
            tracing::debug!("Dropped backlog line for {}: {}", self.path.display(), e);
        }
    }
}

//! Output module for harvest progress and results
//!
//! This module handles:
//! - The plain-text backlog of progress lines (`LogSink`, `BacklogFile`)
//! - Exporting harvested posts as JSON
//! - Recording and printing run statistics

mod backlog;
mod json;
pub mod stats;
mod traits;

pub use backlog::BacklogFile;
pub use json::write_results_json;
pub use stats::{print_statistics, RunStatistics};
pub use traits::{LogSink, MemorySink, NullSink};

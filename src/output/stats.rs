//! Run statistics
//!
//! Counters collected while a harvest runs, and a plain-text report of them.

use chrono::{DateTime, Utc};

/// Counters for one harvest
#[derive(Debug, Clone, PartialEq)]
pub struct RunStatistics {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished, if it has
    pub finished_at: Option<DateTime<Utc>>,

    /// Page number the listing walk started from
    pub start_page: Option<u32>,

    /// Listing pages requested
    pub listing_pages_requested: u64,

    /// Listing pages skipped after a failed fetch
    pub listing_pages_skipped: u64,

    /// Posts found across all listing pages
    pub posts_listed: u64,

    /// Posts with no link (deleted or malformed rows)
    pub posts_without_link: u64,

    /// Post pages fetched and parsed
    pub details_fetched: u64,

    /// Post pages whose fetch failed, leaving a partial record
    pub details_degraded: u64,

    /// Comments collected across all posts
    pub comments_collected: u64,
}

impl RunStatistics {
    /// Starts a fresh set of counters stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            start_page: None,
            listing_pages_requested: 0,
            listing_pages_skipped: 0,
            posts_listed: 0,
            posts_without_link: 0,
            details_fetched: 0,
            details_degraded: 0,
            comments_collected: 0,
        }
    }

    /// Stamps the finish time
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Run duration in whole seconds, once finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }

    /// Share of attempted post pages that were fetched, as a percentage
    pub fn detail_success_rate(&self) -> f64 {
        let attempted = self.details_fetched + self.details_degraded;
        if attempted == 0 {
            return 0.0;
        }
        (self.details_fetched as f64 / attempted as f64) * 100.0
    }
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Harvest Statistics ===\n");

    println!("Run:");
    println!("  Started: {}", stats.started_at.to_rfc3339());
    if let Some(finished) = stats.finished_at {
        println!("  Finished: {}", finished.to_rfc3339());
    }
    if let Some(seconds) = stats.duration_seconds() {
        println!("  Duration: {}s", seconds);
    }
    if let Some(page) = stats.start_page {
        println!("  Start page: {}", page);
    }
    println!();

    println!("Listing:");
    println!("  Pages requested: {}", stats.listing_pages_requested);
    println!("  Pages skipped: {}", stats.listing_pages_skipped);
    println!("  Posts listed: {}", stats.posts_listed);
    println!("  Posts without link: {}", stats.posts_without_link);
    println!();

    println!("Posts:");
    println!("  Fetched: {}", stats.details_fetched);
    println!("  Degraded: {}", stats.details_degraded);
    println!("  Comments: {}", stats.comments_collected);
    println!();

    println!(
        "Success Rate: {:.1}% ({} / {} post pages fetched)",
        stats.detail_success_rate(),
        stats.details_fetched,
        stats.details_fetched + stats.details_degraded
    );
}

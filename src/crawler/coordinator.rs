//! Harvest coordinator - main run orchestration logic
//!
//! This module ties the steps of a harvest together:
//! - Resolving where the listing walk starts
//! - Walking listing pages for post summaries
//! - Following every linked post to its detail page
//! - Collecting run statistics and backlog lines along the way

use crate::config::{Config, ForumConfig};
use crate::crawler::detail::{fetch_detail, DetailResult, DetailStatus};
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::listing::{fetch_listings, ListingWalk};
use crate::crawler::pagination::resolve_previous_page_number;
use crate::model::{PostDetail, PostSummary};
use crate::output::{write_results_json, BacklogFile, LogSink, RunStatistics};
use crate::ScrapeError;
use futures::stream::{self, StreamExt};
use std::path::Path;
use std::sync::Arc;

/// Everything a finished harvest produced
#[derive(Debug, Clone)]
pub struct HarvestOutcome {
    /// One record per linked post, in listing order
    pub details: Vec<PostDetail>,

    /// Counters for the run
    pub stats: RunStatistics,
}

/// Main harvest coordinator
pub struct Harvester<F: PageFetcher> {
    forum: ForumConfig,
    concurrency: usize,
    fetcher: F,
    sink: Arc<dyn LogSink>,
}

impl<F: PageFetcher> Harvester<F> {
    /// Creates a harvester over any page source
    ///
    /// # Arguments
    ///
    /// * `config` - Forum and crawler settings
    /// * `fetcher` - Where pages come from
    /// * `sink` - Where backlog lines go
    pub fn new(config: &Config, fetcher: F, sink: Arc<dyn LogSink>) -> Self {
        Self {
            forum: config.forum.clone(),
            concurrency: config.crawler.max_concurrent_fetches.max(1) as usize,
            fetcher,
            sink,
        }
    }

    pub fn forum(&self) -> &ForumConfig {
        &self.forum
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Number of the listing page just before the board index
    pub async fn resolve_previous_page_number(&self) -> Result<u32, ScrapeError> {
        resolve_previous_page_number(&self.fetcher, &self.forum).await
    }

    /// Walks `page_count` listing pages after `previous_page_number`
    pub async fn fetch_listings(&self, previous_page_number: u32, page_count: u32) -> ListingWalk {
        fetch_listings(
            &self.fetcher,
            &self.forum,
            previous_page_number,
            page_count,
            self.concurrency,
            self.sink.as_ref(),
        )
        .await
    }

    /// Fetches the post page behind one summary
    pub async fn fetch_detail(&self, summary: &PostSummary) -> DetailResult {
        fetch_detail(&self.fetcher, &self.forum, summary, self.sink.as_ref()).await
    }

    /// Runs a complete harvest
    ///
    /// 1. Resolve the previous page number (fatal on failure)
    /// 2. Walk the configured number of listing pages
    /// 3. Drop summaries without a link
    /// 4. Fetch every remaining post page, keeping listing order
    ///
    /// # Returns
    ///
    /// * `Ok(HarvestOutcome)` - Best-effort records plus statistics
    /// * `Err(ScrapeError)` - The board index could not be resolved
    pub async fn run(&self) -> Result<HarvestOutcome, ScrapeError> {
        let mut stats = RunStatistics::new();
        tracing::info!(
            "Starting harvest of {} ({} pages, {} concurrent fetches)",
            self.forum.board,
            self.forum.page_count,
            self.concurrency
        );
        self.sink
            .append(&format!("harvest of board {} started", self.forum.board));

        let previous = self.resolve_previous_page_number().await?;
        stats.start_page = Some(previous.saturating_add(1));

        let walk = self.fetch_listings(previous, self.forum.page_count).await;
        stats.listing_pages_requested = walk.pages_requested.len() as u64;
        stats.listing_pages_skipped = walk.pages_skipped.len() as u64;
        stats.posts_listed = walk.summaries.len() as u64;

        let (linked, unlinked): (Vec<PostSummary>, Vec<PostSummary>) = walk
            .summaries
            .into_iter()
            .partition(PostSummary::has_detail_link);
        stats.posts_without_link = unlinked.len() as u64;
        for summary in &unlinked {
            tracing::debug!("Skipping post without link: '{}'", summary.title);
        }

        let results: Vec<DetailResult> = stream::iter(linked.iter())
            .map(|summary| self.fetch_detail(summary))
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut details = Vec::with_capacity(results.len());
        for result in results {
            match result.status {
                DetailStatus::Fetched => stats.details_fetched += 1,
                DetailStatus::Degraded => stats.details_degraded += 1,
                DetailStatus::NoLink => {}
            }
            stats.comments_collected += result.detail.comments.len() as u64;
            details.push(result.detail);
        }

        stats.finish();
        tracing::info!(
            "Harvest completed: {} posts ({} degraded), {} comments",
            details.len(),
            stats.details_degraded,
            stats.comments_collected
        );
        self.sink.append("harvest finished");

        Ok(HarvestOutcome { details, stats })
    }
}

impl Harvester<HttpFetcher> {
    /// Builds a harvester that fetches over HTTP
    pub fn from_config(config: &Config, sink: Arc<dyn LogSink>) -> Result<Self, ScrapeError> {
        let fetcher = HttpFetcher::new(&config.http)?;
        Ok(Self::new(config, fetcher, sink))
    }
}

/// Runs a complete harvest over HTTP
///
/// Sets up the backlog file (emptied first if configured), runs the harvest,
/// and writes the results to JSON when `output.results-path` is set.
///
/// # Example
///
/// ```no_run
/// use ptt_trawl::config::load_config;
/// use ptt_trawl::crawler::run_harvest;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("trawl.toml"))?;
/// let outcome = run_harvest(&config).await?;
/// println!("{} posts", outcome.details.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_harvest(config: &Config) -> Result<HarvestOutcome, ScrapeError> {
    let backlog = if config.output.truncate_backlog {
        BacklogFile::truncated(&config.output.backlog_path)?
    } else {
        BacklogFile::new(&config.output.backlog_path)
    };

    let harvester = Harvester::from_config(config, Arc::new(backlog))?;
    let outcome = harvester.run().await?;

    if let Some(results_path) = &config.output.results_path {
        write_results_json(&outcome.details, Path::new(results_path))?;
    }

    Ok(outcome)
}

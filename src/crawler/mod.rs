//! Crawler module for walking a board
//!
//! This module contains the network-facing steps of a harvest:
//! - HTTP fetching behind the `PageFetcher` seam
//! - Resolving the newest listing page number
//! - Walking listing pages for post summaries
//! - Following posts to their detail pages
//! - Overall run coordination

mod coordinator;
mod detail;
mod fetcher;
mod listing;
mod pagination;

pub use coordinator::{run_harvest, HarvestOutcome, Harvester};
pub use detail::{fetch_detail, DetailResult, DetailStatus};
pub use fetcher::{build_http_client, FetchedPage, HttpFetcher, PageFetcher};
pub use listing::{fetch_listing_page, fetch_listings, page_numbers, ListingWalk};
pub use pagination::{
    find_previous_page_link, parse_page_number, resolve_previous_page_number, PREVIOUS_PAGE_LINK,
};

use crate::config::Config;
use crate::ScrapeError;

/// Runs a complete harvest
///
/// This is the main entry point for a run. It will:
/// 1. Open the backlog
/// 2. Build the HTTP client
/// 3. Resolve the newest listing page
/// 4. Walk listing pages and post pages
/// 5. Write results if configured
///
/// # Arguments
///
/// * `config` - The harvester configuration
///
/// # Returns
///
/// * `Ok(HarvestOutcome)` - Harvest completed, possibly with skipped pages
/// * `Err(ScrapeError)` - Harvest could not start
pub async fn harvest(config: &Config) -> Result<HarvestOutcome, ScrapeError> {
    run_harvest(config).await
}

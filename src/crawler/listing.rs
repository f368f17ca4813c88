//! Listing walker
//!
//! Walks listing pages from newest to oldest and collects a summary for
//! every post row. A page that cannot be fetched is skipped; the walk never
//! fails as a whole.

use crate::config::ForumConfig;
use crate::crawler::fetcher::PageFetcher;
use crate::extract::{extract_summary, listing_fragments};
use crate::model::PostSummary;
use crate::output::LogSink;
use futures::stream::{self, StreamExt};

/// Outcome of one listing walk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingWalk {
    /// Summaries, newest page first and in page order within a page
    pub summaries: Vec<PostSummary>,

    /// Page numbers requested, in walk order
    pub pages_requested: Vec<u32>,

    /// Page numbers skipped after a failed fetch
    pub pages_skipped: Vec<u32>,
}

/// Page numbers to walk, newest first
///
/// The index page is one past `previous_page_number`, so the walk starts
/// there and counts down `page_count` pages. Numbers below 1 do not exist on
/// the forum and are left out.
///
/// # Example
///
/// ```
/// use ptt_trawl::crawler::page_numbers;
///
/// assert_eq!(page_numbers(100, 3), vec![101, 100, 99]);
/// assert_eq!(page_numbers(1, 5), vec![2, 1]);
/// ```
pub fn page_numbers(previous_page_number: u32, page_count: u32) -> Vec<u32> {
    let start = previous_page_number.saturating_add(1);
    (0..page_count)
        .map_while(|offset| start.checked_sub(offset))
        .take_while(|&page| page >= 1)
        .collect()
}

/// Fetches one listing page and extracts its rows
///
/// Returns None if the page could not be fetched or returned a non-success
/// status.
pub async fn fetch_listing_page<F>(
    fetcher: &F,
    forum: &ForumConfig,
    page_number: u32,
    sink: &dyn LogSink,
) -> Option<Vec<PostSummary>>
where
    F: PageFetcher + ?Sized,
{
    let url = forum.listing_url(page_number);
    sink.append(&format!("start listing page {}", page_number));

    let page = match fetcher.fetch(&url).await {
        Ok(page) if page.is_success() => page,
        Ok(page) => {
            tracing::warn!("Listing page {} returned HTTP {}, skipping", page_number, page.status);
            sink.append(&format!(
                "listing page {} failed: HTTP {}",
                page_number, page.status
            ));
            return None;
        }
        Err(e) => {
            tracing::warn!("Listing page {} could not be fetched: {}", page_number, e);
            sink.append(&format!("listing page {} failed: {}", page_number, e));
            return None;
        }
    };

    let summaries: Vec<PostSummary> = listing_fragments(&page.body)
        .iter()
        .map(|fragment| extract_summary(fragment))
        .collect();

    tracing::debug!("Listing page {}: {} posts", page_number, summaries.len());
    sink.append(&format!(
        "finished listing page {}, got {} posts",
        page_number,
        summaries.len()
    ));

    Some(summaries)
}

/// Walks `page_count` listing pages starting after `previous_page_number`
///
/// Up to `concurrency` pages are in flight at once. Results are merged in
/// walk order no matter which fetch finishes first.
pub async fn fetch_listings<F>(
    fetcher: &F,
    forum: &ForumConfig,
    previous_page_number: u32,
    page_count: u32,
    concurrency: usize,
    sink: &dyn LogSink,
) -> ListingWalk
where
    F: PageFetcher + ?Sized,
{
    let pages = page_numbers(previous_page_number, page_count);
    tracing::info!(
        "Walking {} listing pages of {} ({:?}..={:?})",
        pages.len(),
        forum.board,
        pages.first(),
        pages.last()
    );

    let results: Vec<(u32, Option<Vec<PostSummary>>)> = stream::iter(pages.iter().copied())
        .map(|page_number| async move {
            let summaries = fetch_listing_page(fetcher, forum, page_number, sink).await;
            (page_number, summaries)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut walk = ListingWalk {
        pages_requested: pages,
        ..ListingWalk::default()
    };

    for (page_number, summaries) in results {
        match summaries {
            Some(summaries) => walk.summaries.extend(summaries),
            None => walk.pages_skipped.push(page_number),
        }
    }

    tracing::info!(
        "Listing walk done: {} posts, {} pages skipped",
        walk.summaries.len(),
        walk.pages_skipped.len()
    );
    walk
}

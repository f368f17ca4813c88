//! Pagination resolver
//!
//! The board index (`/bbs/<board>/index.html`) is always the newest listing
//! page but carries no number of its own. Its "previous page" button links to
//! `/bbs/<board>/index<N>.html`, which tells us the index is page N + 1.

use crate::config::ForumConfig;
use crate::crawler::fetcher::PageFetcher;
use crate::ScrapeError;
use scraper::{Html, Selector};

/// The second button in the paging group: "‹ previous page"
pub const PREVIOUS_PAGE_LINK: &str =
    "#action-bar-container > div > div.btn-group.btn-group-paging > a:nth-child(2)";

/// Fetches the board index and returns the number of the page before it
///
/// # Errors
///
/// * `ScrapeError::Transport` - The index could not be fetched or returned a
///   non-success status
/// * `ScrapeError::Extraction` - The paging button or its link is missing
/// * `ScrapeError::PageNumber` - The link does not end in a page number
pub async fn resolve_previous_page_number<F>(
    fetcher: &F,
    forum: &ForumConfig,
) -> Result<u32, ScrapeError>
where
    F: PageFetcher + ?Sized,
{
    let url = forum.index_url();
    tracing::info!("Resolving page number from {}", url);

    let page = fetcher
        .fetch(&url)
        .await
        .map_err(|e| ScrapeError::Transport {
            url: url.clone(),
            reason: e.to_string(),
        })?;

    if !page.is_success() {
        return Err(ScrapeError::Transport {
            url,
            reason: format!("HTTP {}", page.status),
        });
    }

    let link = find_previous_page_link(&page.body)?;
    let previous = parse_page_number(&link, &forum.board)?;

    tracing::info!("Previous page is {} (link {})", previous, link);
    Ok(previous)
}

/// Returns the trimmed href of the "previous page" button
pub fn find_previous_page_link(page_html: &str) -> Result<String, ScrapeError> {
    let selector = Selector::parse(PREVIOUS_PAGE_LINK).map_err(|e| {
        ScrapeError::Extraction(format!("invalid paging selector: {:?}", e))
    })?;

    let document = Html::parse_document(page_html);
    let anchor = document.select(&selector).next().ok_or_else(|| {
        ScrapeError::Extraction("previous-page button not found on board index".to_string())
    })?;

    let href = anchor.value().attr("href").ok_or_else(|| {
        ScrapeError::Extraction("previous-page button has no link".to_string())
    })?;

    Ok(href.trim().to_string())
}

/// Parses N out of `/bbs/<board>/index<N>.html`
///
/// Absolute links (`https://host/bbs/<board>/index<N>.html`) are accepted too.
///
/// # Example
///
/// ```
/// use ptt_trawl::crawler::parse_page_number;
///
/// assert_eq!(parse_page_number("/bbs/Stock/index7310.html", "Stock").unwrap(), 7310);
/// assert!(parse_page_number("/bbs/Stock/indexabc.html", "Stock").is_err());
/// ```
pub fn parse_page_number(link: &str, board: &str) -> Result<u32, ScrapeError> {
    let invalid = || ScrapeError::PageNumber {
        link: link.to_string(),
    };

    let board_path = format!("/bbs/{}", board);
    let (path, digits) = link
        .strip_suffix(".html")
        .and_then(|stem| stem.rsplit_once("/index"))
        .ok_or_else(invalid)?;

    if !path.ends_with(&board_path) {
        return Err(invalid());
    }

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    digits.parse::<u32>().map_err(|_| invalid())
}

//! Listing page extraction
//!
//! A listing page holds one `div.r-ent` block per post:
//!
//! ```html
//! <div class="r-ent">
//!   <div class="title"><a href="/bbs/Stock/M.1713400000.A.ABC.html">[新聞] ...</a></div>
//!   <div class="meta"><div class="author">stocker</div><div class="date"> 4/18</div></div>
//! </div>
//! ```
//!
//! Deleted posts keep the block but drop the anchor, leaving only plain text
//! in `div.title`.

use crate::extract::select::{select_all_html, select_first_attr, select_first_text};
use crate::model::PostSummary;
use scraper::Html;

/// Every post row inside the listing container
pub const LISTING_ITEM: &str =
    "#main-container > div.r-list-container.action-bar-margin.bbs-screen > div.r-ent";

const TITLE_LINK: &str = "div.r-ent div.title a";
const AUTHOR: &str = "div.r-ent div.meta div.author";
const DATE: &str = "div.r-ent div.meta div.date";

/// Outer HTML of every post row on a listing page, in document order
pub fn listing_fragments(page_html: &str) -> Vec<String> {
    let document = Html::parse_document(page_html);
    select_all_html(document.root_element(), LISTING_ITEM)
}

/// Builds a summary from one post row
///
/// Never fails: a field whose element is missing is left empty.
///
/// # Example
///
/// ```
/// use ptt_trawl::extract::extract_summary;
///
/// let row = r#"<div class="r-ent">
///     <div class="title"><a href="/bbs/Stock/M.1.A.2.html"> Hello </a></div>
///     <div class="meta"><div class="author">alice</div><div class="date"> 4/01</div></div>
/// </div>"#;
/// let summary = extract_summary(row);
/// assert_eq!(summary.title, "Hello");
/// assert_eq!(summary.detail_link, "/bbs/Stock/M.1.A.2.html");
/// ```
pub fn extract_summary(fragment_html: &str) -> PostSummary {
    let fragment = Html::parse_fragment(fragment_html);
    let root = fragment.root_element();

    PostSummary {
        title: select_first_text(root, TITLE_LINK),
        author: select_first_text(root, AUTHOR),
        publish_date: select_first_text(root, DATE),
        detail_link: select_first_attr(root, TITLE_LINK, "href"),
    }
}

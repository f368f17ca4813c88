//! Post page extraction
//!
//! The post header is a run of `div.article-metaline` blocks inside
//! `#main-content`; the fourth child holds the publish time. Push comments
//! follow the body as `div.push` blocks with three marker spans each.

use crate::extract::select::{has_match, select_all_html, select_first_text, select_first_text_raw};
use crate::model::Comment;
use scraper::Html;

const PUBLISH_DATETIME: &str = "#main-content > div:nth-child(4) > span.article-meta-value";

/// Every push comment block on a post page
pub const COMMENT_ITEM: &str = "#main-content > div.push";

const PUSH_USER: &str = "span.push-userid";
const PUSH_CONTENT: &str = "span.push-content";
const PUSH_TIME: &str = "span.push-ipdatetime";

/// Publish time from the post header, untrimmed, or "" if absent
pub fn extract_publish_datetime(page_html: &str) -> String {
    let document = Html::parse_document(page_html);
    select_first_text_raw(document.root_element(), PUBLISH_DATETIME)
}

/// Outer HTML of every push comment block, in document order
pub fn comment_fragments(page_html: &str) -> Vec<String> {
    let document = Html::parse_document(page_html);
    select_all_html(document.root_element(), COMMENT_ITEM)
}

/// Builds a comment from one push block
///
/// Returns None unless the block carries all three marker spans (user id,
/// content, timestamp). The forum renders notices such as "file too large"
/// as `div.push` without them, and those are not comments.
pub fn extract_comment(fragment_html: &str) -> Option<Comment> {
    let fragment = Html::parse_fragment(fragment_html);
    let root = fragment.root_element();

    if ![PUSH_USER, PUSH_CONTENT, PUSH_TIME]
        .iter()
        .all(|marker| has_match(root, marker))
    {
        return None;
    }

    Some(Comment {
        user_name: select_first_text(root, PUSH_USER),
        content: select_first_text(root, PUSH_CONTENT),
        time: select_first_text(root, PUSH_TIME),
    })
}

/// Extracts every well-formed comment on a post page, in document order
pub fn extract_comments(page_html: &str) -> Vec<Comment> {
    comment_fragments(page_html)
        .iter()
        .filter_map(|fragment| extract_comment(fragment))
        .collect()
}

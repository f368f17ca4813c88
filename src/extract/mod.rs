//! Markup extraction for listing and post pages
//!
//! Everything in this module is pure: it takes HTML text and returns records,
//! with no I/O. Missing elements degrade to empty strings, never to errors.
//!
//! - `listing`: post rows on a board listing page
//! - `detail`: publish time and push comments on a post page
//! - `select`: the total "first match or empty" helpers both build on

mod detail;
mod listing;
pub mod select;

pub use detail::{
    comment_fragments, extract_comment, extract_comments, extract_publish_datetime, COMMENT_ITEM,
};
pub use listing::{extract_summary, listing_fragments, LISTING_ITEM};
pub use select::{select_first_attr, select_first_text, select_first_text_raw};

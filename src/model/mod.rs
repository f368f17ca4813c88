//! Record types produced by a harvest
//!
//! # Components
//!
//! - `PostSummary`: one row of a board listing page
//! - `PostDetail`: a post enriched with data from its own page
//! - `Comment`: one push comment under a post
//!
//! Every field is a plain `String` that is empty when the source page did not
//! provide it.

mod comment;
mod post;

// Re-export main types
pub use comment::Comment;
pub use post::{PostDetail, PostSummary};

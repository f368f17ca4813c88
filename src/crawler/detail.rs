//! Detail walker
//!
//! Follows a listing summary to its post page and collects the publish time
//! and push comments. Failures never propagate: the caller always gets a
//! record back, partially filled if the page could not be read.

use crate::config::ForumConfig;
use crate::crawler::fetcher::PageFetcher;
use crate::extract::{extract_comments, extract_publish_datetime};
use crate::model::{PostDetail, PostSummary};
use crate::output::LogSink;

/// How far a detail fetch got
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailStatus {
    /// Post page fetched and parsed
    Fetched,

    /// Post page could not be fetched; only listing fields are set
    Degraded,

    /// Summary had no link, nothing was requested
    NoLink,
}

/// A post record and how it was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct DetailResult {
    pub detail: PostDetail,
    pub status: DetailStatus,
}

/// Fetches the post page behind `summary`
///
/// * No link: returns title and author only, without any request.
/// * Fetch failure or non-success status: logs it and returns title, author
///   and the absolute link.
/// * Otherwise: also fills the publish time and every well-formed comment.
pub async fn fetch_detail<F>(
    fetcher: &F,
    forum: &ForumConfig,
    summary: &PostSummary,
    sink: &dyn LogSink,
) -> DetailResult
where
    F: PageFetcher + ?Sized,
{
    let mut detail = PostDetail::from_summary(summary, &forum.base_host);

    if !summary.has_detail_link() {
        tracing::debug!("Post '{}' has no link, not fetching", summary.title);
        return DetailResult {
            detail,
            status: DetailStatus::NoLink,
        };
    }

    sink.append(&format!("start detail {}", summary.detail_link));

    let page = match fetcher.fetch(&detail.detail_link).await {
        Ok(page) if page.is_success() => page,
        Ok(page) => {
            tracing::warn!(
                "Post '{}' returned HTTP {} from {}",
                summary.title,
                page.status,
                detail.detail_link
            );
            sink.append(&format!(
                "detail {} failed: HTTP {}",
                summary.title, page.status
            ));
            return DetailResult {
                detail,
                status: DetailStatus::Degraded,
            };
        }
        Err(e) => {
            tracing::warn!("Post '{}' could not be fetched: {}", summary.title, e);
            sink.append(&format!("detail {} failed: {}", summary.title, e));
            return DetailResult {
                detail,
                status: DetailStatus::Degraded,
            };
        }
    };

    detail.publish_datetime = extract_publish_datetime(&page.body);
    detail.comments = extract_comments(&page.body);

    tracing::debug!(
        "Post '{}': {} comments",
        detail.title,
        detail.comments.len()
    );
    sink.append(&detail.to_string());

    DetailResult {
        detail,
        status: DetailStatus::Fetched,
    }
}

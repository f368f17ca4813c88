use crate::model::Comment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A post as it appears on a listing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    pub author: String,

    /// Short date as shown in the listing (e.g. " 4/01")
    pub publish_date: String,

    /// Site-relative link to the post page; empty for deleted posts
    pub detail_link: String,
}

impl PostSummary {
    /// Returns true if the post can be followed to a detail page
    pub fn has_detail_link(&self) -> bool {
        !self.detail_link.is_empty()
    }
}

impl fmt::Display for PostSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "User: {}", self.author)?;
        writeln!(f, "Publish Date: {}", self.publish_date)?;
        write!(f, "Detail Link: {}", self.detail_link)
    }
}

/// A post with data collected from its own page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub title: String,
    pub author: String,

    /// Full timestamp from the post header; empty if the page was not fetched
    pub publish_datetime: String,

    /// Absolute URL of the post page
    pub detail_link: String,

    /// Push comments in page order
    pub comments: Vec<Comment>,
}

impl PostDetail {
    /// Starts a detail record from a listing summary
    ///
    /// Copies title and author, resolves the link against `base_host`, and
    /// leaves the datetime and comments empty. A summary without a link keeps
    /// an empty link rather than pointing at the bare host.
    pub fn from_summary(summary: &PostSummary, base_host: &str) -> Self {
        let detail_link = if summary.has_detail_link() {
            format!("{}{}", base_host, summary.detail_link)
        } else {
            String::new()
        };

        Self {
            title: summary.title.clone(),
            author: summary.author.clone(),
            publish_datetime: String::new(),
            detail_link,
            comments: Vec::new(),
        }
    }
}

impl fmt::Display for PostDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "User: {}", self.author)?;
        writeln!(f, "Publish Datetime: {}", self.publish_datetime)?;
        writeln!(f, "Detail Link: {}", self.detail_link)?;
        let comments: Vec<String> = self.comments.iter().map(|c| c.to_string()).collect();
        write!(f, "Push Comments: [{}]", comments.join(", "))
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// A push comment left under a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Account id of the commenter
    pub user_name: String,

    /// Comment text, with the leading ": " kept as the forum renders it
    pub content: String,

    /// IP and/or timestamp column as rendered by the forum
    pub time: String,
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Comment(user_name='{}', content='{}', time='{}')",
            self.user_name, self.content, self.time
        )
    }
}

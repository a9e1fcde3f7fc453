use serde::{Deserialize, Serialize};

/// A single submission from a subreddit listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    /// Net score; can be negative.
    pub score: i64,
    /// The submission's target URL. Self posts point back at their own permalink.
    #[serde(rename = "url")]
    pub link: String,
    /// Site-relative path of the discussion page.
    pub permalink: String,
}

impl Post {
    /// Whether the post links somewhere other than its own discussion page.
    #[must_use]
    pub fn has_external_link(&self) -> bool {
        !self.link.contains(&self.permalink)
    }
}

/// The top posts of one subreddit, in the order the API ranked them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub posts: Vec<Post>,
}

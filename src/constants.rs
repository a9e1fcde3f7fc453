//! Shared constants used across the application.

use std::time::Duration;

/// Origin of the site serving both the listing API and the discussion pages.
pub const REDDIT_URL: &str = "https://www.reddit.com";

/// Subreddits fetched when none are given on the command line.
pub const DEFAULT_SUBS: [&str; 4] = ["rust", "python", "programming", "math"];

/// Number of posts requested per subreddit unless overridden with `-n`.
pub const DEFAULT_LIMIT: u32 = 5;

/// Timeout applied to every listing request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Honest user agent identifying this tool to the listing API.
pub const USER_AGENT: &str = concat!("top-posts/", env!("CARGO_PKG_VERSION"));

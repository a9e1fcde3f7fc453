//! Command-line arguments.

use clap::Parser;

use crate::constants::DEFAULT_LIMIT;

/// Retrieves top posts for given subs.
#[derive(Parser, Debug, Clone)]
#[command(name = "top-posts", version)]
pub struct Args {
    /// Subreddits to fetch (default: rust, python, programming, math)
    pub subs: Vec<String>,

    /// Number of posts to fetch per subreddit
    #[arg(
        short = 'n',
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub n_results: u32,
}

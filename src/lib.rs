//! Top posts library.
//!
//! Fetches the day's top posts for a set of subreddits concurrently and renders
//! them as plain text, one block per subreddit in name order.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

pub mod args;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod listing;
pub mod models;
pub mod render;

pub use config::Config;
pub use error::FetchError;
pub use fetcher::{fetch_all, fetch_group};
pub use models::{Group, Post};
pub use render::{format_group, format_post};

/// Fetch `limit` top posts for each of `subs` and write them to `out`.
///
/// An empty `subs` falls back to [`constants::DEFAULT_SUBS`]. Nothing is written
/// unless every fetch succeeds.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, any fetch fails, or `out`
/// cannot be written to.
pub async fn run<W: Write>(
    config: &Config,
    subs: &[String],
    limit: u32,
    out: &mut W,
) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let subs: Vec<&str> = if subs.is_empty() {
        constants::DEFAULT_SUBS.to_vec()
    } else {
        subs.iter().map(String::as_str).collect()
    };
    debug!(?subs, limit, "Fetching top posts");

    let groups = fetch_all(config, &subs, limit)
        .await
        .context("Failed to fetch top posts")?;

    for group in &groups {
        writeln!(out, "{group}").context("Failed to write output")?;
    }
    out.flush().context("Failed to write output")?;

    Ok(())
}

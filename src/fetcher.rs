//! Concurrent retrieval of subreddit listings.
//!
//! All listings of a run are requested over one [`reqwest::Client`] created for
//! that run. The requests are polled together on the current task and the batch
//! fails as soon as any one of them does.

use futures_util::future::try_join_all;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::FetchError;
use crate::listing::ListingResponse;
use crate::models::Group;

/// Listing endpoint for the day's top posts of `sub`.
#[must_use]
pub fn top_url(origin: &str, sub: &str, limit: u32) -> String {
    format!("{origin}/r/{sub}/top.json?sort=top&t=day&limit={limit}")
}

/// Build the client shared by every request of one run.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_client(config: &Config) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(FetchError::Client)
}

/// Fetch the top `limit` posts of one subreddit.
///
/// # Errors
///
/// Returns an error if the request fails, the response status is not 200, or
/// the body does not have the listing shape.
pub async fn fetch_group(
    client: &Client,
    origin: &str,
    sub: &str,
    limit: u32,
) -> Result<Group, FetchError> {
    let url = top_url(origin, sub, limit);
    debug!(url = %url, "Fetching listing");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            sub: sub.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            sub: sub.to_string(),
            status,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| FetchError::Transport {
            sub: sub.to_string(),
            source,
        })?;

    let posts = ListingResponse::from_slice(&body)
        .map_err(|source| FetchError::Decode {
            sub: sub.to_string(),
            source,
        })?
        .into_posts();

    debug!(sub = %sub, posts = posts.len(), "Decoded listing");

    Ok(Group {
        name: sub.to_string(),
        posts,
    })
}

/// Fetch every subreddit concurrently and return the groups sorted by name.
///
/// The client lives only for the duration of this call. The first failure drops
/// the requests still in flight and is returned as is.
///
/// # Errors
///
/// Returns the first [`FetchError`] raised by any of the fetches.
pub async fn fetch_all<S: AsRef<str>>(
    config: &Config,
    subs: &[S],
    limit: u32,
) -> Result<Vec<Group>, FetchError> {
    let client = build_client(config)?;
    let origin = config.origin();

    let fetches = subs
        .iter()
        .map(|sub| fetch_group(&client, origin, sub.as_ref(), limit));
    let mut groups = try_join_all(fetches).await?;

    groups.sort_by(|a, b| a.name.cmp(&b.name));
    info!(groups = groups.len(), limit, "Fetched all listings");

    Ok(groups)
}

//! Typed mapping of the subreddit listing JSON.
//!
//! The API wraps every object in a `{"kind": ..., "data": ...}` envelope; only the
//! `data` halves matter here:
//!
//! ```json
//! {"data": {"children": [{"data": {"title": "...", "score": 1, "url": "...", "permalink": "..."}}]}}
//! ```

use serde::Deserialize;

use crate::models::Post;

/// Top-level listing response.
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
pub struct ListingChild {
    pub data: Post,
}

impl ListingResponse {
    /// Decode a listing body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not JSON or a required key is missing or
    /// has the wrong type.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// The listed posts, in API order.
    #[must_use]
    pub fn into_posts(self) -> Vec<Post> {
        self.data
            .children
            .into_iter()
            .map(|child| child.data)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "kind": "Listing",
        "data": {
            "after": "t3_xyz",
            "children": [
                {"kind": "t3", "data": {
                    "title": "Low score first",
                    "score": 3,
                    "url": "https://example.com/a",
                    "permalink": "/r/rust/comments/1/a/",
                    "author": "someone"
                }},
                {"kind": "t3", "data": {
                    "title": "High score second",
                    "score": 900,
                    "url": "https://www.reddit.com/r/rust/comments/2/b/",
                    "permalink": "/r/rust/comments/2/b/"
                }},
                {"kind": "t3", "data": {
                    "title": "Negative",
                    "score": -4,
                    "url": "https://example.com/c",
                    "permalink": "/r/rust/comments/3/c/"
                }}
            ]
        }
    }"#;

    #[test]
    fn test_decode_preserves_order() {
        let posts = ListingResponse::from_slice(SAMPLE.as_bytes())
            .unwrap()
            .into_posts();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Low score first", "High score second", "Negative"]);
        assert_eq!(posts[2].score, -4);
        assert_eq!(posts[0].link, "https://example.com/a");
        assert_eq!(posts[1].permalink, "/r/rust/comments/2/b/");
    }

    #[test]
    fn test_empty_children() {
        let posts = ListingResponse::from_slice(br#"{"data": {"children": []}}"#)
            .unwrap()
            .into_posts();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_missing_key_is_error() {
        let body = br#"{"data": {"children": [{"data": {"title": "x", "score": 1, "permalink": "/p"}}]}}"#;
        let err = ListingResponse::from_slice(body).unwrap_err();
        assert!(err.to_string().contains("url"), "unexpected error: {err}");
    }

    #[test]
    fn test_wrong_type_is_error() {
        let body = br#"{"data": {"children": [{"data": {"title": "x", "score": "lots", "url": "u", "permalink": "/p"}}]}}"#;
        assert!(ListingResponse::from_slice(body).is_err());
    }

    #[test]
    fn test_not_json_is_error() {
        assert!(ListingResponse::from_slice(b"<html>rate limited</html>").is_err());
    }
}

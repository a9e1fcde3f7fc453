//! Plain-text rendering of posts and groups.

use std::fmt;

use crate::constants::REDDIT_URL;
use crate::models::{Group, Post};

const INDENT: &str = "        ";

/// Render one post as two or three lines, without a trailing newline.
///
/// ```text
///    412: Title of the post
///         Discussion: https://www.reddit.com/r/rust/comments/...
///         Link:       https://example.com/article
/// ```
///
/// The `Link` line is only present when the post points away from its own
/// discussion page.
#[must_use]
pub fn format_post(post: &Post) -> String {
    let mut lines = vec![
        format!("{:>6}: {}", post.score, post.title),
        format!("{INDENT}Discussion: {REDDIT_URL}{}", post.permalink),
    ];
    if post.has_external_link() {
        lines.push(format!("{INDENT}{:<12}{}", "Link:", post.link));
    }
    lines.join("\n")
}

/// Render a group as its title-cased name followed by each of its posts.
#[must_use]
pub fn format_group(group: &Group) -> String {
    let mut out = title_case(&group.name);
    for post in &group.posts {
        out.push('\n');
        out.push_str(&format_post(post));
    }
    out
}

/// Upper-case every letter that does not follow another letter and lower-case
/// the rest, so `"learn_rust"` becomes `"Learn_Rust"` and `"3d"` becomes `"3D"`.
#[must_use]
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_letter = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_post(self))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_group(self))
    }
}

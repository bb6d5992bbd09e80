//! Best-effort scrapes of free-text feed fields.
//!
//! Upstream formats are not ours to control, so the patterns are kept exactly
//! as they are: first match only, non-greedy prefix.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static WATCH_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*?\s-\s").expect("watch prefix pattern"));

static AUTHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)author:\s*([^<]+)").expect("author pattern"));

/// Drop everything up to and including the first `" - "`.
///
/// Titles without the separator come back unchanged.
pub fn strip_watch_prefix(title: &str) -> Cow<'_, str> {
    WATCH_PREFIX.replace(title, "")
}

/// Pull the author name out of a shelf item description
/// (`"... author: Jane Doe<br/> ..."`).
///
/// The capture is returned as the feed carried it; entity references are
/// left alone.
pub fn extract_author(description: &str) -> Option<String> {
    let caps = AUTHOR.captures(description)?;
    let author = caps.get(1)?.as_str().trim().to_string();
    (!author.is_empty()).then_some(author)
}

//! Per-source configuration sections.

use serde::Deserialize;

/// `[letterboxd]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LetterboxdConfig {
    pub username: Option<String>,
}

/// `[goodreads]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GoodreadsConfig {
    pub user_id: Option<String>,
}

/// `[github]` section.
///
/// The token only raises the API rate limit; leaving it out changes nothing
/// else about what gets collected.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GithubConfig {
    pub username: Option<String>,
    pub token: Option<String>,
}

/// `[http]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout. Unset means the client default (no timeout).
    pub timeout_secs: Option<u64>,
}

/// Treat blank strings the same as a missing value.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

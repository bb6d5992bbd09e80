use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "Untitled";
pub const NO_LINK: &str = "#";

/// A film logged on the movie diary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedItem {
    pub title: String,
    /// Display date (`"Sep 14, 2024"`), empty when the feed had none.
    pub date: String,
    pub link: String,
}

/// A book from the "read" shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub link: String,
}

/// A repository with recent public activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltRepoItem {
    /// Raw event type tag, e.g. `PushEvent`.
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: Option<String>,
    /// Display date without year (`"Sep 14"`).
    pub date: String,
    pub link: String,
}

impl WatchedItem {
    pub fn new(title: Option<String>, date: String, link: Option<String>) -> Self {
        Self {
            title: or_placeholder(title, UNTITLED),
            date,
            link: or_placeholder(link, NO_LINK),
        }
    }
}

impl ReadItem {
    pub fn new(title: Option<String>, author: Option<String>, link: Option<String>) -> Self {
        Self {
            title: or_placeholder(title, UNTITLED),
            author,
            link: or_placeholder(link, NO_LINK),
        }
    }
}

impl BuiltRepoItem {
    pub fn new(kind: String, repo: String, date: String) -> Self {
        let link = format!("https://github.com/{}", repo);
        Self {
            kind,
            repo: Some(repo),
            date,
            link,
        }
    }
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

use crate::app::{NowpageError, Result};
use crate::config::sources::non_blank;
use crate::config::LetterboxdConfig;
use crate::domain::WatchedItem;
use crate::fetcher::FetchRequest;
use crate::normalizer::date::long_date;
use crate::normalizer::text::strip_watch_prefix;
use crate::normalizer::{parse_feed, FeedEntry};
use crate::sources::{endpoint, ActivitySource};

pub const LETTERBOXD_URL: &str = "https://letterboxd.com";
pub const MAX_ITEMS: usize = 5;

/// Recently logged films from a user's diary RSS feed.
#[derive(Debug, Clone)]
pub struct LetterboxdSource {
    username: Option<String>,
    base_url: String,
}

impl LetterboxdSource {
    pub fn new(config: &LetterboxdConfig) -> Self {
        Self {
            username: non_blank(&config.username).map(String::from),
            base_url: LETTERBOXD_URL.to_string(),
        }
    }

    /// Point the feed request at another host (mirrors, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn username(&self) -> Result<&str> {
        self.username
            .as_deref()
            .ok_or(NowpageError::MissingSetting("letterboxd.username"))
    }
}

impl ActivitySource for LetterboxdSource {
    type Item = WatchedItem;

    fn name(&self) -> &'static str {
        "letterboxd"
    }

    fn request(&self) -> Result<FetchRequest> {
        let url = endpoint(&self.base_url, &[self.username()?, "rss", ""])?;
        Ok(FetchRequest::get(url))
    }

    fn parse(&self, body: &[u8]) -> Result<Vec<WatchedItem>> {
        Ok(parse_feed(body)?
            .into_iter()
            .take(MAX_ITEMS)
            .map(watched_item)
            .collect())
    }

    fn profile_url(&self) -> Option<String> {
        let username = self.username.as_deref()?;
        endpoint(LETTERBOXD_URL, &[username, ""])
            .ok()
            .map(String::from)
    }
}

fn watched_item(entry: FeedEntry) -> WatchedItem {
    let title = entry.title.map(|t| strip_watch_prefix(&t).into_owned());
    let date = entry.published.as_ref().map(long_date).unwrap_or_default();
    WatchedItem::new(title, date, entry.link)
}

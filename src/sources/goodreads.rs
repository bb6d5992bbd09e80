use crate::app::{NowpageError, Result};
use crate::config::sources::non_blank;
use crate::config::GoodreadsConfig;
use crate::domain::ReadItem;
use crate::fetcher::FetchRequest;
use crate::normalizer::text::extract_author;
use crate::normalizer::{parse_feed, FeedEntry};
use crate::sources::{endpoint, ActivitySource};

pub const GOODREADS_URL: &str = "https://www.goodreads.com";
pub const MAX_ITEMS: usize = 5;

/// Books on the user's "read" shelf, newest first as the feed orders them.
#[derive(Debug, Clone)]
pub struct GoodreadsSource {
    user_id: Option<String>,
    base_url: String,
}

impl GoodreadsSource {
    pub fn new(config: &GoodreadsConfig) -> Self {
        Self {
            user_id: non_blank(&config.user_id).map(String::from),
            base_url: GOODREADS_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ActivitySource for GoodreadsSource {
    type Item = ReadItem;

    fn name(&self) -> &'static str {
        "goodreads"
    }

    fn request(&self) -> Result<FetchRequest> {
        let user_id = self
            .user_id
            .as_deref()
            .ok_or(NowpageError::MissingSetting("goodreads.user_id"))?;

        let mut url = endpoint(&self.base_url, &["review", "list_rss", user_id])?;
        url.query_pairs_mut().append_pair("shelf", "read");
        Ok(FetchRequest::get(url))
    }

    fn parse(&self, body: &[u8]) -> Result<Vec<ReadItem>> {
        Ok(parse_feed(body)?
            .into_iter()
            .take(MAX_ITEMS)
            .map(read_item)
            .collect())
    }

    fn profile_url(&self) -> Option<String> {
        let user_id = self.user_id.as_deref()?;
        endpoint(GOODREADS_URL, &["user", "show", user_id])
            .ok()
            .map(String::from)
    }
}

fn read_item(entry: FeedEntry) -> ReadItem {
    let author = entry.description.as_deref().and_then(extract_author);
    ReadItem::new(entry.title, author, entry.link)
}

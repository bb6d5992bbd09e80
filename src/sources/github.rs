use std::collections::HashSet;

use serde::Deserialize;

use crate::app::{NowpageError, Result};
use crate::config::sources::non_blank;
use crate::config::GithubConfig;
use crate::domain::BuiltRepoItem;
use crate::fetcher::FetchRequest;
use crate::normalizer::date::{parse_timestamp, short_date};
use crate::sources::{endpoint, ActivitySource};

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_URL: &str = "https://github.com";
pub const ACCEPT: &str = "application/vnd.github.v3+json";
pub const MAX_REPOS: usize = 3;

/// Event types that count as building something.
pub const TRACKED_EVENTS: [&str; 4] = ["PushEvent", "CreateEvent", "PullRequestEvent", "ReleaseEvent"];

/// One entry of `/users/{user}/events/public`. Only the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub repo: Option<EventRepo>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    /// `owner/name`
    pub name: Option<String>,
}

impl Event {
    fn is_tracked(&self) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|k| TRACKED_EVENTS.contains(&k))
    }

    fn repo_name(&self) -> Option<&str> {
        self.repo
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .filter(|n| !n.is_empty())
    }
}

/// Repositories the user recently pushed to, branched, opened PRs on or
/// released, most recent first.
#[derive(Debug, Clone)]
pub struct GithubSource {
    username: Option<String>,
    token: Option<String>,
    base_url: String,
}

impl GithubSource {
    pub fn new(config: &GithubConfig) -> Self {
        Self {
            username: non_blank(&config.username).map(String::from),
            token: non_blank(&config.token).map(String::from),
            base_url: GITHUB_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ActivitySource for GithubSource {
    type Item = BuiltRepoItem;

    fn name(&self) -> &'static str {
        "github"
    }

    fn request(&self) -> Result<FetchRequest> {
        let username = self
            .username
            .as_deref()
            .ok_or(NowpageError::MissingSetting("github.username"))?;

        let url = endpoint(&self.base_url, &["users", username, "events", "public"])?;
        let mut request = FetchRequest::get(url).header("Accept", ACCEPT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }
        Ok(request)
    }

    fn parse(&self, body: &[u8]) -> Result<Vec<BuiltRepoItem>> {
        let events: Vec<Event> = serde_json::from_slice(body)?;
        Ok(active_repositories(events))
    }

    fn profile_url(&self) -> Option<String> {
        let username = self.username.as_deref()?;
        endpoint(GITHUB_URL, &[username]).ok().map(String::from)
    }
}

/// First tracked event per repository, stopping at [`MAX_REPOS`] repositories.
pub fn active_repositories(events: impl IntoIterator<Item = Event>) -> Vec<BuiltRepoItem> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(MAX_REPOS);

    for event in events {
        if !event.is_tracked() {
            continue;
        }
        let Some(repo) = event.repo_name() else {
            continue;
        };
        if !seen.insert(repo.to_string()) {
            continue;
        }

        let date = event
            .created_at
            .as_deref()
            .and_then(parse_timestamp)
            .map(|dt| short_date(&dt))
            .unwrap_or_default();

        items.push(BuiltRepoItem::new(
            event.kind.clone().unwrap_or_default(),
            repo.to_string(),
            date,
        ));

        if items.len() == MAX_REPOS {
            break;
        }
    }

    items
}

use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::domain::{ActivityReport, BuiltRepoItem, ProfileLinks, ReadItem, SourceOutcome, WatchedItem};
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::sources::{collect, ActivitySource, GithubSource, GoodreadsSource, LetterboxdSource};

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub letterboxd: LetterboxdSource,
    pub goodreads: GoodreadsSource,
    pub github: GithubSource,
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.http)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: &Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            fetcher,
            letterboxd: LetterboxdSource::new(&config.letterboxd),
            goodreads: GoodreadsSource::new(&config.goodreads),
            github: GithubSource::new(&config.github),
        }
    }

    pub async fn collect_letterboxd(&self) -> SourceOutcome<WatchedItem> {
        collect(&self.letterboxd, self.fetcher.as_ref()).await
    }

    pub async fn collect_goodreads(&self) -> SourceOutcome<ReadItem> {
        collect(&self.goodreads, self.fetcher.as_ref()).await
    }

    pub async fn collect_github(&self) -> SourceOutcome<BuiltRepoItem> {
        collect(&self.github, self.fetcher.as_ref()).await
    }

    /// Run all three sources concurrently and wait for every one to settle.
    pub async fn collect_activity(&self) -> ActivityReport {
        let (letterboxd, goodreads, github) = tokio::join!(
            self.collect_letterboxd(),
            self.collect_goodreads(),
            self.collect_github(),
        );

        ActivityReport {
            letterboxd,
            goodreads,
            github,
            profiles: self.profiles(),
        }
    }

    pub fn profiles(&self) -> ProfileLinks {
        ProfileLinks {
            letterboxd: self.letterboxd.profile_url(),
            goodreads: self.goodreads.profile_url(),
            github: self.github.profile_url(),
        }
    }
}

//! The three activity sources.
//!
//! Every source has the same shape: build one request from its configured
//! identifier, fetch it, and turn the body into a short list of display
//! records. [`collect`] runs that pipeline and folds every failure into a
//! [`SourceOutcome`], so a source can never fail the build.

pub mod github;
pub mod goodreads;
pub mod letterboxd;

pub use github::GithubSource;
pub use goodreads::GoodreadsSource;
pub use letterboxd::LetterboxdSource;

use url::Url;

use crate::app::{FailureKind, NowpageError, Result};
use crate::domain::SourceOutcome;
use crate::fetcher::{FetchRequest, Fetcher};

pub trait ActivitySource {
    type Item;

    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// The request to make, or `MissingSetting` when the source is not
    /// configured. No request is made in that case.
    fn request(&self) -> Result<FetchRequest>;

    /// Turn a successful response body into display records.
    fn parse(&self, body: &[u8]) -> Result<Vec<Self::Item>>;

    /// Public profile page, when configured.
    fn profile_url(&self) -> Option<String>;
}

/// Fetch and parse one source. Never fails; see [`SourceOutcome`].
pub async fn collect<S>(source: &S, fetcher: &(dyn Fetcher + Send + Sync)) -> SourceOutcome<S::Item>
where
    S: ActivitySource + Sync,
{
    let result: Result<Vec<S::Item>> = async {
        let request = source.request()?;
        let body = fetcher.fetch(&request).await?;
        source.parse(&body)
    }
    .await;

    match &result {
        Ok(items) => {
            tracing::info!(source = source.name(), count = items.len(), "Fetched activity");
        }
        Err(e) if e.kind() == FailureKind::ConfigurationMissing => {
            tracing::warn!(source = source.name(), "{}, skipping", e);
        }
        Err(e) => {
            tracing::error!(source = source.name(), kind = e.kind().as_str(), "Error fetching activity: {}", e);
        }
    }

    result.into()
}

/// `base` with `segments` appended as path segments (each one escaped).
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| NowpageError::Config(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_escapes_segments() {
        let url = endpoint("https://letterboxd.com", &["a b/c", "rss", ""]).unwrap();
        assert_eq!(url.as_str(), "https://letterboxd.com/a%20b%2Fc/rss/");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint("http://127.0.0.1:9000/mirror/", &["users", "x"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/mirror/users/x");
    }

    #[test]
    fn test_endpoint_rejects_bad_base() {
        assert!(endpoint("not a url", &["x"]).is_err());
        assert!(endpoint("mailto:me@example.com", &["x"]).is_err());
    }
}

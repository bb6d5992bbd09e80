pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// A single GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    /// Extra headers, sent in order.
    pub headers: Vec<(&'static str, String)>,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Performs a request and returns the body of a successful response.
///
/// A non-success status must come back as
/// [`UpstreamStatus`](crate::app::NowpageError::UpstreamStatus).
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>>;
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use crate::app::{NowpageError, Result};
use crate::config::HttpConfig;
use crate::fetcher::{FetchRequest, Fetcher};

const USER_AGENT: &str = concat!("nowpage/", env!("CARGO_PKG_VERSION"));

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(USER_AGENT);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

fn build_headers(request: &FetchRequest) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in &request.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| NowpageError::Other(format!("Invalid header name: {}", name)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| NowpageError::Other(format!("Invalid value for header {}", name)))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>> {
        let headers = build_headers(request)?;

        tracing::debug!(url = %request.url, "GET");
        let response = self.client.get(&request.url).headers(headers).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NowpageError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

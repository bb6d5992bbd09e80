use thiserror::Error;

#[derive(Error, Debug)]
pub enum NowpageError {
    #[error("{0} is not set")]
    MissingSetting(&'static str),

    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    ConfigFile(#[from] crate::config::ConfigError),

    #[error("{0}")]
    Other(String),
}

/// Why a source produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A required identifier is absent; no request was made.
    ConfigurationMissing,
    /// Non-success status or the request never completed.
    UpstreamUnavailable,
    /// The body could not be parsed into the expected shape.
    MalformedResponse,
    /// Anything else (bad endpoint, local IO).
    Internal,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::ConfigurationMissing => "configuration missing",
            FailureKind::UpstreamUnavailable => "upstream unavailable",
            FailureKind::MalformedResponse => "malformed response",
            FailureKind::Internal => "internal error",
        }
    }
}

impl NowpageError {
    pub fn kind(&self) -> FailureKind {
        match self {
            NowpageError::MissingSetting(_) => FailureKind::ConfigurationMissing,
            NowpageError::UpstreamStatus(_) => FailureKind::UpstreamUnavailable,
            NowpageError::Http(e) if e.is_decode() => FailureKind::MalformedResponse,
            NowpageError::Http(_) => FailureKind::UpstreamUnavailable,
            NowpageError::FeedParse(_) | NowpageError::Json(_) => FailureKind::MalformedResponse,
            NowpageError::InvalidUrl(_)
            | NowpageError::Io(_)
            | NowpageError::Config(_)
            | NowpageError::ConfigFile(_)
            | NowpageError::Other(_) => FailureKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, NowpageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_setting_is_configuration_missing() {
        let err = NowpageError::MissingSetting("github.username");
        assert_eq!(err.kind(), FailureKind::ConfigurationMissing);
        assert_eq!(err.to_string(), "github.username is not set");
    }

    #[test]
    fn test_status_is_upstream_unavailable() {
        let err = NowpageError::UpstreamStatus(503);
        assert_eq!(err.kind(), FailureKind::UpstreamUnavailable);
        assert_eq!(err.to_string(), "Upstream returned HTTP 503");
    }

    #[test]
    fn test_parse_errors_are_malformed() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert_eq!(
            NowpageError::Json(json_err).kind(),
            FailureKind::MalformedResponse
        );
        assert_eq!(
            NowpageError::FeedParse("bad".into()).kind(),
            FailureKind::MalformedResponse
        );
    }
}

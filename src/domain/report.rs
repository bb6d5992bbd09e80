use serde::{Deserialize, Serialize};

use crate::domain::{BuiltRepoItem, ReadItem, SourceOutcome, WatchedItem};

/// Outcomes of one build, one per source.
#[derive(Debug)]
pub struct ActivityReport {
    pub letterboxd: SourceOutcome<WatchedItem>,
    pub goodreads: SourceOutcome<ReadItem>,
    pub github: SourceOutcome<BuiltRepoItem>,
    pub profiles: ProfileLinks,
}

/// "View all" links for configured sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letterboxd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goodreads: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// The document handed to the page renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub letterboxd: Vec<WatchedItem>,
    pub goodreads: Vec<ReadItem>,
    pub github: Vec<BuiltRepoItem>,
    pub profiles: ProfileLinks,
}

impl ActivityReport {
    /// Log one line per source.
    pub fn log_summary(&self) {
        log_outcome("letterboxd", &self.letterboxd);
        log_outcome("goodreads", &self.goodreads);
        log_outcome("github", &self.github);
    }

    pub fn into_activity(self) -> Activity {
        Activity {
            letterboxd: self.letterboxd.into_items(),
            goodreads: self.goodreads.into_items(),
            github: self.github.into_items(),
            profiles: self.profiles,
        }
    }
}

fn log_outcome<T>(source: &'static str, outcome: &SourceOutcome<T>) {
    tracing::info!(source, status = %outcome.summary(), "Source finished");
}

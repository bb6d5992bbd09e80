use crate::app::{FailureKind, NowpageError};

/// What one source produced during a build.
///
/// A failure never escapes as an error: it is kept here for logging and
/// tests while [`items`](SourceOutcome::items) reads as empty.
#[derive(Debug)]
pub enum SourceOutcome<T> {
    Fetched(Vec<T>),
    Failed(NowpageError),
}

impl<T> SourceOutcome<T> {
    pub fn items(&self) -> &[T] {
        match self {
            SourceOutcome::Fetched(items) => items,
            SourceOutcome::Failed(_) => &[],
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            SourceOutcome::Fetched(items) => items,
            SourceOutcome::Failed(_) => Vec::new(),
        }
    }

    pub fn failure(&self) -> Option<&NowpageError> {
        match self {
            SourceOutcome::Fetched(_) => None,
            SourceOutcome::Failed(e) => Some(e),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure().map(NowpageError::kind)
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, SourceOutcome::Fetched(_))
    }

    /// One-line status for build logs.
    pub fn summary(&self) -> String {
        match self {
            SourceOutcome::Fetched(items) => format!("{} items", items.len()),
            SourceOutcome::Failed(e) => format!("{} ({})", e.kind().as_str(), e),
        }
    }
}

impl<T> From<crate::app::Result<Vec<T>>> for SourceOutcome<T> {
    fn from(result: crate::app::Result<Vec<T>>) -> Self {
        match result {
            Ok(items) => SourceOutcome::Fetched(items),
            Err(e) => SourceOutcome::Failed(e),
        }
    }
}

pub mod activity;
pub mod outcome;
pub mod report;

pub use activity::{BuiltRepoItem, ReadItem, WatchedItem};
pub use outcome::SourceOutcome;
pub use report::{Activity, ActivityReport, ProfileLinks};

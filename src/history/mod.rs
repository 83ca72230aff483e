//! Build history access
//!
//! The build store is owned by the CI server; this module only describes
//! the read queries the aggregation needs, plus a JSON snapshot store.

mod run;
mod snapshot;

pub use run::{BuildRecord, FreestyleBuild, Run, WorkflowRun};
pub use snapshot::{HistoryFile, HistorySnapshot};

use crate::error::Result;
use crate::types::{BuildRef, ChangeEntry, ChangeLogSet, FingerprintRecord};

/// Read-only view of the build history
///
/// Every method may be called concurrently from independent requests.
/// Missing data is reported as `None` or an empty collection; `Err` is
/// reserved for the store itself failing.
pub trait BuildHistory: Send + Sync {
    /// Chronological predecessor of `build` in the same job
    fn previous_build(&self, build: &BuildRef) -> Result<Option<BuildRef>>;

    /// Change-log sets recorded by `build`, normalised across build flavours
    fn change_sets(&self, build: &BuildRef) -> Result<Vec<ChangeLogSet>>;

    /// Fingerprints recorded by `build`, if it recorded any
    fn fingerprint_record(&self, build: &BuildRef) -> Result<Option<FingerprintRecord>>;

    /// Existing builds of `job` numbered in `(from, to]`
    fn builds_between(&self, job: &str, from: u32, to: u32) -> Result<Vec<BuildRef>>;

    /// Build whose change log owns `entry`
    fn owning_build(&self, entry: &ChangeEntry) -> Result<Option<BuildRef>> {
        Ok(entry.parent.clone())
    }
}

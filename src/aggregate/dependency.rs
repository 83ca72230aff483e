//! Fingerprint dependency aggregator
//!
//! Compares the fingerprinted upstream builds of a build against its
//! predecessor and reports every upstream build that was picked up in
//! between.

use crate::aggregate::ChangesAggregator;
use crate::error::Result;
use crate::history::BuildHistory;
use crate::types::{BuildRef, DependencyChange};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Follows fingerprinted artifact dependencies that moved forward
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyChangesAggregator;

impl ChangesAggregator for DependencyChangesAggregator {
    fn aggregate_builds_with_changes(
        &self,
        history: &dyn BuildHistory,
        build: &BuildRef,
    ) -> Result<Vec<BuildRef>> {
        let Some(previous) = history.previous_build(build)? else {
            trace!("{build} has no previous build");
            return Ok(Vec::new());
        };

        let mut builds = Vec::new();
        for change in dependency_changes(history, build, &previous)?.values() {
            builds.extend(change.builds(history)?);
        }
        Ok(builds)
    }
}

impl DependencyChange {
    /// Upstream builds picked up by this change
    pub fn builds(&self, history: &dyn BuildHistory) -> Result<Vec<BuildRef>> {
        history.builds_between(&self.job, self.from, self.to)
    }
}

/// Upstream jobs whose build number went up from `other` to `build`
///
/// Empty when either build has no fingerprint record. Jobs only `build`
/// depends on are not changes: there is no older number to compare with.
pub fn dependency_changes(
    history: &dyn BuildHistory,
    build: &BuildRef,
    other: &BuildRef,
) -> Result<BTreeMap<String, DependencyChange>> {
    let Some(current) = history.fingerprint_record(build)? else {
        trace!("{build} has no fingerprint record");
        return Ok(BTreeMap::new());
    };
    let Some(previous) = history.fingerprint_record(other)? else {
        trace!("{other} has no fingerprint record");
        return Ok(BTreeMap::new());
    };

    let current_deps = current.dependencies();
    let mut changes = BTreeMap::new();

    for (job, from) in previous.dependencies() {
        let Some(&to) = current_deps.get(&job) else {
            continue;
        };
        if from < to {
            debug!("{build}: dependency {job} moved {from} -> {to}");
            changes.insert(job.clone(), DependencyChange { job, from, to });
        }
    }

    Ok(changes)
}

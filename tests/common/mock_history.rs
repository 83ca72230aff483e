//! Mock build history and aggregators for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use all_changes::aggregate::ChangesAggregator;
use all_changes::error::{Error, Result};
use all_changes::history::BuildHistory;
use all_changes::types::{BuildRef, ChangeEntry, ChangeLogSet, FingerprintRecord};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Hand-written `BuildHistory` backed by plain maps
///
/// Features:
/// - Change sets stamped with their owning build on insert
/// - Commits whose owner lookup fails, to exercise unresolvable entries
/// - Call tracking for `change_sets`
/// - Error injection for failure path testing
#[derive(Default)]
pub struct MockHistory {
    change_sets: HashMap<BuildRef, Vec<ChangeLogSet>>,
    unowned_commits: HashSet<String>,
    change_set_calls: Mutex<Vec<BuildRef>>,
    error_on_change_sets: Mutex<Option<String>>,
}

impl MockHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `entries` as one change log of `build`
    pub fn add_change_set(&mut self, build: &BuildRef, entries: Vec<ChangeEntry>) {
        let entries = entries
            .into_iter()
            .map(|e| ChangeEntry {
                parent: Some(build.clone()),
                ..e
            })
            .collect();
        self.change_sets
            .entry(build.clone())
            .or_default()
            .push(ChangeLogSet {
                kind: "git".to_string(),
                entries,
            });
    }

    /// Make `owning_build` fail to resolve entries of this commit
    pub fn orphan_commit(&mut self, commit_id: &str) {
        self.unowned_commits.insert(commit_id.to_string());
    }

    /// Make `change_sets` return an error
    pub fn fail_change_sets(&self, msg: &str) {
        *self.error_on_change_sets.lock().unwrap() = Some(msg.to_string());
    }

    /// Builds `change_sets` was called with
    pub fn get_change_set_calls(&self) -> Vec<BuildRef> {
        self.change_set_calls.lock().unwrap().clone()
    }
}

impl BuildHistory for MockHistory {
    fn previous_build(&self, _build: &BuildRef) -> Result<Option<BuildRef>> {
        Ok(None)
    }

    fn change_sets(&self, build: &BuildRef) -> Result<Vec<ChangeLogSet>> {
        self.change_set_calls.lock().unwrap().push(build.clone());

        if let Some(msg) = self.error_on_change_sets.lock().unwrap().as_ref() {
            return Err(Error::History(msg.clone()));
        }

        Ok(self.change_sets.get(build).cloned().unwrap_or_default())
    }

    fn fingerprint_record(&self, _build: &BuildRef) -> Result<Option<FingerprintRecord>> {
        Ok(None)
    }

    fn builds_between(&self, _job: &str, _from: u32, _to: u32) -> Result<Vec<BuildRef>> {
        Ok(Vec::new())
    }

    fn owning_build(&self, entry: &ChangeEntry) -> Result<Option<BuildRef>> {
        if self.unowned_commits.contains(&entry.commit_id) {
            return Ok(None);
        }
        Ok(entry.parent.clone())
    }
}

/// Aggregator answering from a fixed adjacency list
///
/// Records every build it was asked about.
#[derive(Default)]
pub struct MockAggregator {
    edges: HashMap<BuildRef, Vec<BuildRef>>,
    calls: Arc<Mutex<Vec<BuildRef>>>,
    fail_on: Option<BuildRef>,
}

impl MockAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `from` has `to` as a direct contributor
    pub fn edge(mut self, from: &BuildRef, to: &BuildRef) -> Self {
        self.edges.entry(from.clone()).or_default().push(to.clone());
        self
    }

    /// Fail when asked about `build`
    pub fn failing_on(mut self, build: &BuildRef) -> Self {
        self.fail_on = Some(build.clone());
        self
    }

    pub fn get_calls(&self) -> Vec<BuildRef> {
        self.calls.lock().unwrap().clone()
    }

    /// Shared handle to the call record, usable after the mock is boxed
    pub fn call_log(&self) -> Arc<Mutex<Vec<BuildRef>>> {
        Arc::clone(&self.calls)
    }
}

impl ChangesAggregator for MockAggregator {
    fn aggregate_builds_with_changes(
        &self,
        _history: &dyn BuildHistory,
        build: &BuildRef,
    ) -> Result<Vec<BuildRef>> {
        self.calls.lock().unwrap().push(build.clone());
        if self.fail_on.as_ref() == Some(build) {
            return Err(Error::History(format!("cannot read {build}")));
        }
        Ok(self.edges.get(build).cloned().unwrap_or_default())
    }
}

//! In-memory build history loaded from a JSON snapshot

use crate::error::{Error, Result};
use crate::history::{BuildHistory, BuildRecord, Run};
use crate::types::{BuildRef, ChangeEntry, ChangeLogSet, FingerprintRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

/// On-disk layout of a snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryFile {
    /// Every known build, in any order
    #[serde(default)]
    pub builds: Vec<BuildRecord>,
}

/// Builds indexed by job and number
#[derive(Debug, Clone, Default)]
pub struct HistorySnapshot {
    jobs: BTreeMap<String, BTreeMap<u32, BuildRecord>>,
}

impl HistorySnapshot {
    /// Empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let file: HistoryFile = serde_json::from_str(json)?;
        Ok(file.builds.into_iter().collect())
    }

    /// Add a build, replacing any build with the same identity
    ///
    /// Change entries are stamped with the build as their owner.
    pub fn insert(&mut self, record: impl Into<BuildRecord>) {
        let mut record = record.into();
        record.stamp_change_owner();
        let id = record.build_ref();
        self.jobs.entry(id.job).or_default().insert(id.number, record);
    }

    /// Look up a build
    pub fn get(&self, build: &BuildRef) -> Option<&BuildRecord> {
        self.jobs.get(&build.job)?.get(&build.number)
    }

    /// Whether the build is present
    pub fn contains(&self, build: &BuildRef) -> bool {
        self.get(build).is_some()
    }

    /// Job names, sorted
    pub fn jobs(&self) -> impl Iterator<Item = &str> {
        self.jobs.keys().map(String::as_str)
    }

    /// Latest build of `job`
    pub fn last_build(&self, job: &str) -> Result<BuildRef> {
        let builds = self
            .jobs
            .get(job)
            .ok_or_else(|| Error::JobNotFound(job.to_string()))?;
        builds
            .keys()
            .next_back()
            .map(|number| BuildRef::new(job, *number))
            .ok_or_else(|| Error::JobNotFound(job.to_string()))
    }

    /// Resolve a job name and optional build number to an existing build
    ///
    /// Without a number the job's latest build is used.
    pub fn resolve(&self, job: &str, number: Option<u32>) -> Result<BuildRef> {
        let Some(number) = number else {
            return self.last_build(job);
        };
        if !self.jobs.contains_key(job) {
            return Err(Error::JobNotFound(job.to_string()));
        }
        let build = BuildRef::new(job, number);
        if self.contains(&build) {
            Ok(build)
        } else {
            Err(Error::BuildNotFound(build))
        }
    }
}

impl FromIterator<BuildRecord> for HistorySnapshot {
    fn from_iter<I: IntoIterator<Item = BuildRecord>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for record in iter {
            snapshot.insert(record);
        }
        snapshot
    }
}

impl BuildHistory for HistorySnapshot {
    fn previous_build(&self, build: &BuildRef) -> Result<Option<BuildRef>> {
        Ok(self.jobs.get(&build.job).and_then(|builds| {
            builds
                .range(..build.number)
                .next_back()
                .map(|(number, _)| BuildRef::new(build.job.clone(), *number))
        }))
    }

    fn change_sets(&self, build: &BuildRef) -> Result<Vec<ChangeLogSet>> {
        let Some(record) = self.get(build) else {
            trace!("No record for {build}, no change sets");
            return Ok(Vec::new());
        };
        Ok(record.change_sets().into_iter().cloned().collect())
    }

    fn fingerprint_record(&self, build: &BuildRef) -> Result<Option<FingerprintRecord>> {
        Ok(self.get(build).and_then(|record| record.fingerprint_record()))
    }

    fn builds_between(&self, job: &str, from: u32, to: u32) -> Result<Vec<BuildRef>> {
        if from >= to {
            return Ok(Vec::new());
        }
        Ok(self
            .jobs
            .get(job)
            .map(|builds| {
                builds
                    .range(from + 1..=to)
                    .map(|(number, _)| BuildRef::new(job, *number))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn owning_build(&self, entry: &ChangeEntry) -> Result<Option<BuildRef>> {
        Ok(entry.parent.clone().filter(|owner| self.contains(owner)))
    }
}

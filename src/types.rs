//! Core types for all-changes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identity of one execution of a job
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BuildRef {
    /// Job name
    pub job: String,
    /// Build number within the job
    pub number: u32,
}

impl BuildRef {
    /// Identity of build `number` of `job`
    pub fn new(job: impl Into<String>, number: u32) -> Self {
        Self {
            job: job.into(),
            number,
        }
    }
}

impl fmt::Display for BuildRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.job, self.number)
    }
}

/// One source-control change as recorded in one build's change log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// SCM commit/revision identifier
    pub commit_id: String,
    /// Author display name
    #[serde(default)]
    pub author: String,
    /// Raw commit message
    #[serde(default)]
    pub msg: String,
    /// Commit time in epoch milliseconds, -1 when the SCM does not report one
    #[serde(default = "unknown_timestamp")]
    pub timestamp: i64,
    /// Paths touched by the change
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected_paths: Vec<String>,
    /// Build whose change log holds this entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<BuildRef>,
}

const fn unknown_timestamp() -> i64 {
    -1
}

impl ChangeEntry {
    /// Message prepared for HTML display: markup escaped, newlines as `<br>`
    pub fn msg_annotated(&self) -> String {
        let mut out = String::with_capacity(self.msg.len());
        for c in self.msg.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#039;"),
                '\n' => out.push_str("<br>"),
                _ => out.push(c),
            }
        }
        out
    }

    /// Content identity used to fold the same change seen by several builds
    ///
    /// Plain concatenation of commit id, annotated message and timestamp.
    pub fn dedup_key(&self) -> String {
        format!("{}{}{}", self.commit_id, self.msg_annotated(), self.timestamp)
    }

    /// First line of the raw message
    pub fn summary(&self) -> &str {
        self.msg.lines().next().unwrap_or("")
    }

    /// Commit time, if the SCM reported one
    pub fn time(&self) -> Option<DateTime<Utc>> {
        if self.timestamp < 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// The changes one checkout contributed to a build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLogSet {
    /// SCM kind ("git", "svn", ...)
    #[serde(default)]
    pub kind: String,
    /// Entries in this change log (may be empty)
    #[serde(default)]
    pub entries: Vec<ChangeEntry>,
}

impl ChangeLogSet {
    /// True when the log has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Checksum of an artifact seen by a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Artifact file name
    pub file_name: String,
    /// MD5 checksum (hex)
    pub md5: String,
    /// Build that originally produced the artifact, if known
    #[serde(default)]
    pub original: Option<BuildRef>,
}

/// All fingerprints recorded by one build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintRecord {
    /// Build that recorded these fingerprints
    pub owner: BuildRef,
    /// Recorded fingerprints
    pub fingerprints: Vec<Fingerprint>,
}

impl FingerprintRecord {
    /// Upstream job -> build number this build depended on
    ///
    /// Artifacts without a known producer, and artifacts produced by the
    /// owner's own job, are not dependencies. When several artifacts of the
    /// same upstream job were consumed, the highest build number wins.
    pub fn dependencies(&self) -> BTreeMap<String, u32> {
        let mut deps: BTreeMap<String, u32> = BTreeMap::new();
        for fp in &self.fingerprints {
            let Some(original) = &fp.original else {
                continue;
            };
            if original.job == self.owner.job {
                continue;
            }
            let number = deps.entry(original.job.clone()).or_insert(original.number);
            if *number < original.number {
                *number = original.number;
            }
        }
        deps
    }
}

/// An upstream job whose consumed build number went up between two builds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyChange {
    /// Upstream job
    pub job: String,
    /// Number recorded by the older downstream build
    pub from: u32,
    /// Number recorded by the newer downstream build
    pub to: u32,
}

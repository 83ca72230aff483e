//! Test data factories for all-changes types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use all_changes::history::{BuildRecord, FreestyleBuild, HistoryFile, HistorySnapshot, WorkflowRun};
use all_changes::types::{BuildRef, ChangeEntry, ChangeLogSet, Fingerprint};

/// Shorthand for a build identity
pub fn id(job: &str, number: u32) -> BuildRef {
    BuildRef::new(job, number)
}

/// Create a change entry with default author and no owner
pub fn make_entry(commit_id: &str, msg: &str, timestamp: i64) -> ChangeEntry {
    ChangeEntry {
        commit_id: commit_id.to_string(),
        author: "Test Author".to_string(),
        msg: msg.to_string(),
        timestamp,
        affected_paths: vec![],
        parent: None,
    }
}

/// A git change log holding one entry per commit id
pub fn make_change_set(commits: &[&str]) -> ChangeLogSet {
    ChangeLogSet {
        kind: "git".to_string(),
        entries: commits
            .iter()
            .map(|c| make_entry(c, &format!("Commit {c}"), commit_time(c)))
            .collect(),
    }
}

/// Stable fake timestamp derived from a commit id
pub fn commit_time(commit_id: &str) -> i64 {
    1_700_000_000_000 + commit_id.bytes().map(i64::from).sum::<i64>() * 1000
}

/// Fingerprint of an artifact produced by `job#number`
pub fn produced_by(file: &str, job: &str, number: u32) -> Fingerprint {
    Fingerprint {
        file_name: file.to_string(),
        md5: format!("{file}-{job}-{number}"),
        original: Some(id(job, number)),
    }
}

/// Classic build with a single change log
pub fn freestyle(
    job: &str,
    number: u32,
    commits: &[&str],
    fingerprints: Option<Vec<Fingerprint>>,
) -> BuildRecord {
    BuildRecord::Freestyle(FreestyleBuild {
        job: job.to_string(),
        number,
        change_set: if commits.is_empty() {
            None
        } else {
            Some(make_change_set(commits))
        },
        fingerprints,
    })
}

/// Pipeline run with one change log per checkout
pub fn workflow(
    job: &str,
    number: u32,
    checkouts: &[&[&str]],
    fingerprints: Option<Vec<Fingerprint>>,
) -> BuildRecord {
    BuildRecord::Workflow(WorkflowRun {
        job: job.to_string(),
        number,
        change_sets: checkouts.iter().map(|c| make_change_set(c)).collect(),
        fingerprints,
    })
}

/// Four jobs wired through fingerprinted files
///
/// proj1, proj2 and proj3 each produce a file; proj4#1 consumes
/// proj1#1, proj2#1 and proj3#1. After proj1 builds twice more and proj2
/// once more, proj4#2 consumes proj1#2, proj1#3 and proj2#2.
///
/// Commit "mono" sits in both proj1#3 and proj2#2, as a monorepo commit
/// would.
pub fn fingerprint_builds() -> Vec<BuildRecord> {
    vec![
        freestyle("proj1", 1, &["p1a"], Some(vec![produced_by("file1", "proj1", 1)])),
        freestyle("proj2", 1, &["p2a"], Some(vec![produced_by("file2", "proj2", 1)])),
        freestyle("proj3", 1, &["p3a"], Some(vec![produced_by("file3", "proj3", 1)])),
        freestyle(
            "proj4",
            1,
            &["p4a"],
            Some(vec![
                produced_by("file1", "proj1", 1),
                produced_by("file2", "proj2", 1),
                produced_by("file3", "proj3", 1),
            ]),
        ),
        freestyle("proj1", 2, &["p1b"], Some(vec![produced_by("file1", "proj1", 2)])),
        freestyle(
            "proj1",
            3,
            &["p1c", "mono"],
            Some(vec![produced_by("file1", "proj1", 3)]),
        ),
        workflow(
            "proj2",
            2,
            &[&["mono"], &["p2b"]],
            Some(vec![produced_by("file2", "proj2", 2)]),
        ),
        freestyle(
            "proj4",
            2,
            &["p4b"],
            Some(vec![
                produced_by("file1", "proj1", 2),
                produced_by("file1", "proj1", 3),
                produced_by("file2", "proj2", 2),
            ]),
        ),
    ]
}

/// [`fingerprint_builds`] loaded into a snapshot
pub fn fingerprint_history() -> HistorySnapshot {
    fingerprint_builds().into_iter().collect()
}

/// [`fingerprint_builds`] as snapshot file JSON
pub fn fingerprint_history_json() -> String {
    serde_json::to_string(&HistoryFile {
        builds: fingerprint_builds(),
    })
    .unwrap()
}

//! Change collection
//!
//! Pulls the change logs of a set of builds, folds entries describing the
//! same change, and maps each distinct change to every build recording it.

use crate::error::Result;
use crate::history::BuildHistory;
use crate::types::{BuildRef, ChangeEntry};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// One distinct change and the builds whose change logs hold it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedChange {
    /// First entry seen for this change
    pub change: ChangeEntry,
    /// Builds that recorded the change
    pub builds: BTreeSet<BuildRef>,
}

/// Deduplicated changes, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeReport {
    /// One entry per distinct change
    pub changes: Vec<AggregatedChange>,
}

impl ChangeReport {
    /// Number of distinct changes
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// True when no build recorded a change
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Changes in report order
    pub fn iter(&self) -> impl Iterator<Item = &AggregatedChange> {
        self.changes.iter()
    }

    /// The `limit` newest changes, or all of them when `limit` is 0
    pub fn most_recent(&self, limit: usize) -> &[AggregatedChange] {
        if limit == 0 {
            &self.changes
        } else {
            &self.changes[..limit.min(self.changes.len())]
        }
    }

    /// Builds recording the change with this commit id
    pub fn builds_for(&self, commit_id: &str) -> Option<&BTreeSet<BuildRef>> {
        self.changes
            .iter()
            .find(|c| c.change.commit_id == commit_id)
            .map(|c| &c.builds)
    }
}

/// Collect and deduplicate the changes recorded by `builds`
///
/// Entries sharing a [`ChangeEntry::dedup_key`] are folded onto the first
/// one seen. Entries whose owning build cannot be resolved are dropped.
pub fn collect_changes<'a, I>(history: &dyn BuildHistory, builds: I) -> Result<ChangeReport>
where
    I: IntoIterator<Item = &'a BuildRef>,
{
    // Group entries by content identity, keeping first-seen order
    let mut group_index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<ChangeEntry>> = Vec::new();
    let mut entry_count = 0usize;

    for build in builds {
        for change_set in history.change_sets(build)? {
            for entry in change_set.entries {
                entry_count += 1;
                let key = entry.dedup_key();
                match group_index.get(&key) {
                    Some(&i) => groups[i].push(entry),
                    None => {
                        group_index.insert(key, groups.len());
                        groups.push(vec![entry]);
                    }
                }
            }
        }
    }

    debug!(
        "Folded {entry_count} change entries into {} changes",
        groups.len()
    );

    // Re-associate each distinct change with every build that recorded it
    let mut changes = Vec::with_capacity(groups.len());
    for group in groups {
        let mut owners = BTreeSet::new();
        for entry in &group {
            match history.owning_build(entry)? {
                Some(owner) => {
                    owners.insert(owner);
                }
                None => warn!("No owning build for change {}, skipping", entry.commit_id),
            }
        }
        if owners.is_empty() {
            continue;
        }
        let Some(change) = group.into_iter().next() else {
            continue;
        };
        changes.push(AggregatedChange {
            change,
            builds: owners,
        });
    }

    changes.sort_by(|a, b| {
        b.change
            .timestamp
            .cmp(&a.change.timestamp)
            .then_with(|| a.change.commit_id.cmp(&b.change.commit_id))
    });

    Ok(ChangeReport { changes })
}

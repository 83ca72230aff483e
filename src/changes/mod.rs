//! All changes behind a build
//!
//! [`AllChanges`] ties the resolver and the collector together:
//! 1. Resolve - find every build that contributed to the start build
//! 2. Collect - fold the change logs of those builds into one report

mod collect;

pub use collect::{collect_changes, AggregatedChange, ChangeReport};

use crate::aggregate::{default_aggregators, resolve_contributing_builds, ChangesAggregator};
use crate::error::{Error, Result};
use crate::history::BuildHistory;
use crate::types::BuildRef;
use std::collections::BTreeSet;
use tracing::debug;

/// Computes the changes behind a build against one build history
///
/// Nothing is cached: every call walks the history as it is at call time.
pub struct AllChanges<'a> {
    history: &'a dyn BuildHistory,
    aggregators: Vec<Box<dyn ChangesAggregator>>,
}

impl<'a> AllChanges<'a> {
    /// Use the given aggregators, in order
    pub fn new(
        history: &'a dyn BuildHistory,
        aggregators: Vec<Box<dyn ChangesAggregator>>,
    ) -> Result<Self> {
        if aggregators.is_empty() {
            return Err(Error::NoAggregators);
        }
        Ok(Self {
            history,
            aggregators,
        })
    }

    /// Follow fingerprinted dependencies only
    pub fn with_default_aggregators(history: &'a dyn BuildHistory) -> Self {
        Self {
            history,
            aggregators: default_aggregators(),
        }
    }

    /// Every build contributing to `build`, `build` included
    pub fn contributing_builds(&self, build: &BuildRef) -> Result<BTreeSet<BuildRef>> {
        resolve_contributing_builds(self.history, &self.aggregators, build)
    }

    /// Deduplicated changes of every contributing build
    pub fn all_changes(&self, build: &BuildRef) -> Result<ChangeReport> {
        let builds = self.contributing_builds(build)?;
        debug!("{build}: {} contributing builds", builds.len());
        collect_changes(self.history, &builds)
    }
}

//! Contributing build resolver
//!
//! Saturates one-hop aggregator answers until no new build turns up.

use crate::aggregate::ChangesAggregator;
use crate::error::{Error, Result};
use crate::history::BuildHistory;
use crate::types::BuildRef;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Every build that contributed changes to `start`, including `start`
///
/// Each round asks every aggregator about every build found so far and
/// stops on the first round that adds nothing, so dependency cycles
/// terminate.
pub fn resolve_contributing_builds(
    history: &dyn BuildHistory,
    aggregators: &[Box<dyn ChangesAggregator>],
    start: &BuildRef,
) -> Result<BTreeSet<BuildRef>> {
    if aggregators.is_empty() {
        return Err(Error::NoAggregators);
    }

    let mut builds = BTreeSet::from([start.clone()]);
    let mut round = 0usize;

    loop {
        round += 1;
        let mut discovered = BTreeSet::new();

        for aggregator in aggregators {
            for build in &builds {
                for neighbour in aggregator.aggregate_builds_with_changes(history, build)? {
                    if !builds.contains(&neighbour) {
                        trace!("    {build} <- {neighbour}");
                        discovered.insert(neighbour);
                    }
                }
            }
        }

        debug!(
            "Round {round} for {start}: {} known, {} new",
            builds.len(),
            discovered.len()
        );

        if discovered.is_empty() {
            break;
        }
        builds.extend(discovered);
    }

    Ok(builds)
}

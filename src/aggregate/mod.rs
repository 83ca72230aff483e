//! Contributing build discovery
//!
//! A [`ChangesAggregator`] answers "which builds fed directly into this
//! one"; [`resolve_contributing_builds`] saturates those one-hop answers
//! into the full set of builds behind a start build.

mod dependency;
mod resolver;

pub use dependency::{dependency_changes, DependencyChangesAggregator};
pub use resolver::resolve_contributing_builds;

use crate::error::Result;
use crate::history::BuildHistory;
use crate::types::BuildRef;

/// One-hop relation between builds
///
/// Implementations must not fail on missing data: a build without the
/// information they need simply has no neighbours.
pub trait ChangesAggregator: Send + Sync {
    /// Builds directly contributing changes to `build`
    fn aggregate_builds_with_changes(
        &self,
        history: &dyn BuildHistory,
        build: &BuildRef,
    ) -> Result<Vec<BuildRef>>;
}

/// The aggregators used when the caller does not pick its own
pub fn default_aggregators() -> Vec<Box<dyn ChangesAggregator>> {
    vec![Box::new(DependencyChangesAggregator)]
}

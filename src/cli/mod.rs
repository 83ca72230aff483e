//! CLI commands
//!
//! Command implementations for the `allchanges` binary.

mod builds;
mod show;
pub mod style;

pub use builds::run_builds;
pub use show::run_show;

use all_changes::error::Result;
use all_changes::history::HistorySnapshot;
use std::path::Path;
use tracing::info;

/// Read and index a history snapshot file
async fn load_history(path: &Path) -> Result<HistorySnapshot> {
    let json = tokio::fs::read_to_string(path).await?;
    let history = HistorySnapshot::from_json(&json)?;
    info!("Loaded build history from {}", path.display());
    Ok(history)
}

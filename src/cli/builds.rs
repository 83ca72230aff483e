//! Builds command - print the builds contributing to a build

use crate::cli::load_history;
use crate::cli::style::{self, arrow, Stylize};
use all_changes::changes::AllChanges;
use all_changes::error::Result;
use anstream::println;
use std::path::Path;

/// Run the builds command
pub async fn run_builds(
    history_path: &Path,
    job: &str,
    build: Option<u32>,
    json: bool,
) -> Result<()> {
    let history = load_history(history_path).await?;
    let start = history.resolve(job, build)?;

    let builds = AllChanges::with_default_aggregators(&history).contributing_builds(&start)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&builds)?);
        return Ok(());
    }

    println!("{} {}", "Builds contributing to".emphasis(), start.accent());
    println!();
    for build in &builds {
        if *build == start {
            println!("  {} {}", style::CURRENT.muted(), build.emphasis());
        } else {
            println!("  {} {}", arrow(), build);
        }
    }
    println!();
    println!(
        "{} build{}",
        builds.len().accent(),
        if builds.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

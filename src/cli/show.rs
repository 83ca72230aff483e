//! Show command - print every change behind a build

use crate::cli::load_history;
use crate::cli::style::{bullet, pipe, Stylize};
use all_changes::changes::AllChanges;
use all_changes::error::Result;
use anstream::println;
use std::path::Path;

/// Run the show command
///
/// Lists distinct changes newest first, each followed by the builds that
/// recorded it.
pub async fn run_show(
    history_path: &Path,
    job: &str,
    build: Option<u32>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let history = load_history(history_path).await?;
    let start = history.resolve(job, build)?;

    let report = AllChanges::with_default_aggregators(&history).all_changes(&start)?;
    let shown = report.most_recent(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("{}", format!("No changes behind {start}").muted());
        return Ok(());
    }

    println!("{} {}", "All changes for".emphasis(), start.accent());
    println!();

    for aggregated in shown {
        let change = &aggregated.change;
        let commit_short: String = change.commit_id.chars().take(8).collect();
        let when = change.time().map_or_else(
            || "unknown date".to_string(),
            |t| t.format("%Y-%m-%d %H:%M").to_string(),
        );

        // Truncate description (char-safe for UTF-8)
        let max_desc = 60;
        let summary = change.summary();
        let desc = if summary.is_empty() {
            "(no message)".to_string()
        } else if summary.chars().count() > max_desc {
            format!("{}...", summary.chars().take(max_desc - 3).collect::<String>())
        } else {
            summary.to_string()
        };

        println!(
            "  {} {} {} {}",
            bullet(),
            commit_short.accent(),
            change.author.muted(),
            when.muted()
        );
        println!("  {}   {}", pipe(), desc);

        let builds: Vec<String> = aggregated.builds.iter().map(ToString::to_string).collect();
        println!("  {}   {}", pipe(), format!("in {}", builds.join(", ")).muted());
    }

    println!();
    if shown.len() < report.len() {
        println!(
            "{} of {} changes",
            shown.len().accent(),
            report.len().accent()
        );
    } else {
        println!(
            "{} change{}",
            report.len().accent(),
            if report.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

//! allchanges - every change that went into a build
//!
//! CLI binary over a JSON build-history snapshot.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "allchanges")]
#[command(about = "Changes from every build that fed into a build")]
#[command(version)]
struct Cli {
    /// Build history snapshot (JSON)
    #[arg(
        long,
        global = true,
        env = "ALLCHANGES_HISTORY",
        default_value = "history.json"
    )]
    history: PathBuf,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every distinct change behind a build
    Show {
        /// Job name
        job: String,

        /// Build number (defaults to the job's last build)
        #[arg(short, long)]
        build: Option<u32>,

        /// Only show the N most recent changes (0 = all)
        #[arg(short = 'n', long, default_value_t = 0)]
        limit: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the builds contributing to a build
    Builds {
        /// Job name
        job: String,

        /// Build number (defaults to the job's last build)
        #[arg(short, long)]
        build: Option<u32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Show {
            job,
            build,
            limit,
            json,
        } => {
            cli::run_show(&cli.history, &job, build, limit, json).await?;
        }
        Commands::Builds { job, build, json } => {
            cli::run_builds(&cli.history, &job, build, json).await?;
        }
    }

    Ok(())
}

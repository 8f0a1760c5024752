//! # quest-cli
//!
//! Command-line frontend for the Quest goal tracker.
//!
//! - `quest goal add simple|eternal|checklist` — create goals
//! - `quest goal list` — show status lines for every goal
//! - `quest goal record <index>` — report progress and collect points
//! - `quest score` — show the running point total
//! - `quest save` / `quest load` — move the goal file explicitly

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::QuestConfig;

/// Quest CLI — track goals and the points they earn.
#[derive(Parser)]
#[command(name = "quest", version, about)]
struct Cli {
    /// Project root directory (defaults to current directory).
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage goals.
    Goal {
        #[command(subcommand)]
        command: commands::goal::GoalCommands,
    },
    /// Show the current score.
    Score,
    /// Write the goals and score to a file.
    Save {
        /// Target file (defaults to the configured goals file).
        #[arg(long)]
        file: Option<String>,
    },
    /// Replace the goals and score from a file.
    Load {
        /// Source file (defaults to the configured goals file).
        #[arg(long)]
        file: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_root = cli.project_root.canonicalize().unwrap_or(cli.project_root);
    let config = QuestConfig::load(&project_root)?;

    match &cli.command {
        Commands::Goal { command } => commands::goal::execute(command, &project_root, &config),
        Commands::Score => commands::score::execute(&project_root, &config),
        Commands::Save { file } => commands::file::save(file.as_deref(), &project_root, &config),
        Commands::Load { file } => commands::file::load(file.as_deref(), &project_root, &config),
    }
}

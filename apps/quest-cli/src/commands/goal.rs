// goal.rs — Goal subcommands: add, list, record.

use std::path::Path;

use clap::Subcommand;
use quest_goal::QuestEvent;

use super::{dispatcher, open_storage, open_store, persist_store};
use crate::config::QuestConfig;

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a new goal.
    Add {
        #[command(subcommand)]
        kind: AddCommands,
    },
    /// List all goals with their status.
    List {
        /// Print goal names only.
        #[arg(long)]
        names: bool,
    },
    /// Record progress on a goal and collect its points.
    Record {
        /// Goal number as shown by `quest goal list` (1-based).
        index: usize,
    },
}

#[derive(Subcommand)]
pub enum AddCommands {
    /// A goal that is completed once (e.g. "Run a marathon").
    Simple {
        /// Goal name.
        name: String,
        /// Short description of the goal.
        #[arg(long, default_value = "")]
        description: String,
        /// Points awarded when the goal is recorded.
        #[arg(long)]
        points: i64,
    },
    /// A goal that never completes and pays out on every event.
    Eternal {
        /// Goal name.
        name: String,
        /// Short description of the goal.
        #[arg(long, default_value = "")]
        description: String,
        /// Points awarded each time the goal is recorded.
        #[arg(long)]
        points: i64,
    },
    /// A goal that completes after a target number of events.
    Checklist {
        /// Goal name.
        name: String,
        /// Short description of the goal.
        #[arg(long, default_value = "")]
        description: String,
        /// Points awarded each time the goal is recorded.
        #[arg(long)]
        points: i64,
        /// Events required for completion.
        #[arg(long)]
        target: u32,
        /// One-time bonus awarded on the event that reaches the target.
        #[arg(long, default_value_t = 0)]
        bonus: i64,
    },
}

pub fn execute(cmd: &GoalCommands, project_root: &Path, config: &QuestConfig) -> anyhow::Result<()> {
    let storage = open_storage(project_root)?;
    let mut store = open_store(&storage, config)?;
    let events = dispatcher(&storage, config);

    match cmd {
        GoalCommands::Add { kind } => {
            let record = match kind {
                AddCommands::Simple {
                    name,
                    description,
                    points,
                } => store.add_simple(name, description, *points)?,
                AddCommands::Eternal {
                    name,
                    description,
                    points,
                } => store.add_eternal(name, description, *points)?,
                AddCommands::Checklist {
                    name,
                    description,
                    points,
                    target,
                    bonus,
                } => store.add_checklist(name, description, *points, *target, *bonus)?,
            };
            let name = record.name().to_string();
            let kind_label = record.kind().label();

            events.dispatch(&QuestEvent::goal_created(&name, kind_label));
            persist_store(&store, &storage, config)?;
            println!("Added {kind_label} goal: {name}");
        }
        GoalCommands::List { names } => {
            if store.is_empty() {
                println!("No goals yet.");
                return Ok(());
            }
            let lines = if *names {
                store.list_names()
            } else {
                store.list_details()
            };
            for (i, line) in lines.iter().enumerate() {
                println!("{}. {}", i + 1, line);
            }
        }
        GoalCommands::Record { index } => {
            let points = store.record_event(*index)?;
            let goal = &store.goals()[index - 1];

            events.dispatch(&QuestEvent::event_recorded(goal.name(), points, store.score()));
            if goal.is_complete() {
                events.dispatch(&QuestEvent::goal_completed(goal.name()));
            }
            persist_store(&store, &storage, config)?;
            println!("Congratulations! You have earned {points} points!");
            println!("You now have {} points.", store.score());
        }
    }
    Ok(())
}

// file.rs — Explicit save/load of the goal file.
//
// Mutating commands already persist to the configured goals file; these
// subcommands move the store to and from an arbitrary file.

use std::path::Path;

use quest_goal::QuestEvent;

use super::{dispatcher, open_storage, open_store, persist_store};
use crate::config::QuestConfig;

/// Write the current goals and score to `file`, or to the configured
/// goals file when omitted.
pub fn save(file: Option<&str>, project_root: &Path, config: &QuestConfig) -> anyhow::Result<()> {
    let storage = open_storage(project_root)?;
    let store = open_store(&storage, config)?;
    let name = file.unwrap_or(&config.goals_file);

    store.save_to(&storage, name)?;
    dispatcher(&storage, config).dispatch(&QuestEvent::goals_saved(store.len(), store.score()));
    println!(
        "Saved {} goal(s) to {}",
        store.len(),
        storage.file_path(name).display()
    );
    Ok(())
}

/// Replace the goals and score from `file`, or reload the configured
/// goals file when omitted. A malformed file leaves everything as it
/// was.
pub fn load(file: Option<&str>, project_root: &Path, config: &QuestConfig) -> anyhow::Result<()> {
    let storage = open_storage(project_root)?;
    let mut store = open_store(&storage, config)?;
    let name = file.unwrap_or(&config.goals_file);

    store.load_from(&storage, name)?;
    persist_store(&store, &storage, config)?;
    dispatcher(&storage, config).dispatch(&QuestEvent::goals_loaded(store.len(), store.score()));
    println!("Loaded {} goal(s); score is {}.", store.len(), store.score());
    Ok(())
}

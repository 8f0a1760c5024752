// mod.rs — Shared command plumbing: storage, store, and event wiring.

pub mod file;
pub mod goal;
pub mod score;

use std::path::Path;

use quest_goal::{EventDispatcher, LogSink};
use quest_store::{FsStorage, GoalStore, TextStorage};

use crate::config::QuestConfig;

/// Open filesystem storage rooted at the project directory.
pub(crate) fn open_storage(project_root: &Path) -> anyhow::Result<FsStorage> {
    Ok(FsStorage::new(project_root)?)
}

/// Load the store from the configured goals file, or start empty when
/// no file exists yet.
pub(crate) fn open_store(storage: &FsStorage, config: &QuestConfig) -> anyhow::Result<GoalStore> {
    let mut store = GoalStore::new();
    match storage.read_text(&config.goals_file) {
        Ok(text) => store.load(&text)?,
        Err(err) if err.is_not_found() => {}
        Err(err) => return Err(err.into()),
    }
    Ok(store)
}

/// Persist the store to the configured goals file.
pub(crate) fn persist_store(
    store: &GoalStore,
    storage: &FsStorage,
    config: &QuestConfig,
) -> anyhow::Result<()> {
    store.save_to(storage, &config.goals_file)?;
    Ok(())
}

/// Event dispatcher with the always-on JSONL log sink attached.
pub(crate) fn dispatcher(storage: &FsStorage, config: &QuestConfig) -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.add_sink(Box::new(LogSink::new(storage.file_path(&config.events_log))));
    dispatcher
}

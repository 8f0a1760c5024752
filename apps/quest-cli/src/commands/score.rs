// score.rs — Show the running point total.

use std::path::Path;

use super::{open_storage, open_store};
use crate::config::QuestConfig;

pub fn execute(project_root: &Path, config: &QuestConfig) -> anyhow::Result<()> {
    let storage = open_storage(project_root)?;
    let store = open_store(&storage, config)?;
    println!("You have {} points.", store.score());
    Ok(())
}

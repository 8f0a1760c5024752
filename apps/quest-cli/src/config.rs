// config.rs — CLI configuration and the .quest/ data layout.
//
// Settings come from `.quest/config.toml` when present; every field has
// a default, so the file is optional:
//
// ```toml
// goals_file = "my-goals.txt"
// events_log = "my-events.jsonl"
// ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// File names the CLI reads and writes, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestConfig {
    /// Goal file persisted by mutating commands and read at startup.
    #[serde(default = "default_goals_file")]
    pub goals_file: String,

    /// JSONL event log fed by the notification sink.
    #[serde(default = "default_events_log")]
    pub events_log: String,
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self {
            goals_file: default_goals_file(),
            events_log: default_events_log(),
        }
    }
}

fn default_goals_file() -> String {
    ".quest/goals.txt".to_string()
}

fn default_events_log() -> String {
    ".quest/events.jsonl".to_string()
}

impl QuestConfig {
    /// Load `.quest/config.toml` under `project_root`, or defaults when
    /// the file is absent.
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let path = Self::data_dir(project_root).join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        tracing::debug!(path = %path.display(), "loading config");
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// The `.quest/` data directory for a project.
    pub fn data_dir(project_root: &Path) -> PathBuf {
        project_root.join(".quest")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_used_when_no_config_file_exists() {
        let dir = tempdir().unwrap();
        let config = QuestConfig::load(dir.path()).unwrap();
        assert_eq!(config.goals_file, ".quest/goals.txt");
        assert_eq!(config.events_log, ".quest/events.jsonl");
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let data_dir = QuestConfig::data_dir(dir.path());
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(data_dir.join("config.toml"), "goals_file = \"custom.txt\"\n").unwrap();

        let config = QuestConfig::load(dir.path()).unwrap();
        assert_eq!(config.goals_file, "custom.txt");
        // Unset fields keep their defaults.
        assert_eq!(config.events_log, ".quest/events.jsonl");
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempdir().unwrap();
        let data_dir = QuestConfig::data_dir(dir.path());
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(data_dir.join("config.toml"), "goals_file = [not toml\n").unwrap();

        assert!(QuestConfig::load(dir.path()).is_err());
    }
}

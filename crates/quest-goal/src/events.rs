// events.rs — Event model and notification dispatch.
//
// The tracker emits events at key lifecycle points. Notification sinks
// (a JSONL log file today, other channels later) subscribe to these
// events. Dispatch is synchronous; a failing sink is reported via
// tracing and skipped so the remaining sinks still receive the event.
// The core store itself emits nothing — the frontend decides what to
// announce.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// Events emitted at key points of the goal lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum QuestEvent {
    /// A new goal was added to the store.
    GoalCreated {
        name: String,
        kind: String,
        timestamp: DateTime<Utc>,
    },

    /// Progress was recorded against a goal.
    EventRecorded {
        name: String,
        points_awarded: i64,
        total_score: i64,
        timestamp: DateTime<Utc>,
    },

    /// A goal reached completion.
    GoalCompleted {
        name: String,
        timestamp: DateTime<Utc>,
    },

    /// The store was written out.
    GoalsSaved {
        count: usize,
        score: i64,
        timestamp: DateTime<Utc>,
    },

    /// The store was replaced from persisted text.
    GoalsLoaded {
        count: usize,
        score: i64,
        timestamp: DateTime<Utc>,
    },
}

impl QuestEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            QuestEvent::GoalCreated { .. } => "goal_created",
            QuestEvent::EventRecorded { .. } => "event_recorded",
            QuestEvent::GoalCompleted { .. } => "goal_completed",
            QuestEvent::GoalsSaved { .. } => "goals_saved",
            QuestEvent::GoalsLoaded { .. } => "goals_loaded",
        }
    }

    /// Helper to create a GoalCreated event.
    pub fn goal_created(name: &str, kind: &str) -> Self {
        QuestEvent::GoalCreated {
            name: name.to_string(),
            kind: kind.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Helper to create an EventRecorded event.
    pub fn event_recorded(name: &str, points_awarded: i64, total_score: i64) -> Self {
        QuestEvent::EventRecorded {
            name: name.to_string(),
            points_awarded,
            total_score,
            timestamp: Utc::now(),
        }
    }

    /// Helper to create a GoalCompleted event.
    pub fn goal_completed(name: &str) -> Self {
        QuestEvent::GoalCompleted {
            name: name.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Helper to create a GoalsSaved event.
    pub fn goals_saved(count: usize, score: i64) -> Self {
        QuestEvent::GoalsSaved {
            count,
            score,
            timestamp: Utc::now(),
        }
    }

    /// Helper to create a GoalsLoaded event.
    pub fn goals_loaded(count: usize, score: i64) -> Self {
        QuestEvent::GoalsLoaded {
            count,
            score,
            timestamp: Utc::now(),
        }
    }
}

/// Trait for receiving quest events.
///
/// Implementations decide what to do with each event: log to a file,
/// notify another process, etc.
pub trait NotificationSink: Send {
    /// Handle an event. Errors are reported by the dispatcher but never
    /// stop the flow.
    fn send(&self, event: &QuestEvent) -> Result<(), EventError>;
}

/// Logs events as JSONL to a file (always-on sink).
#[derive(Debug)]
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NotificationSink for LogSink {
    fn send(&self, event: &QuestEvent) -> Result<(), EventError> {
        // Ensure parent directory exists.
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| EventError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| EventError::Io {
                path: self.path.clone(),
                source,
            })?;

        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json).map_err(|source| EventError::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// Errors from individual sinks are logged (via tracing) but don't
/// prevent other sinks from receiving the event.
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a notification sink.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &QuestEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!("notification sink error: {}", e);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// quest_flow.rs — End-to-end integration test for the goal tracking flow.
//
// Flow:
//   1. Create goals of every kind in a store
//   2. Record events and watch the score accumulate
//   3. Save through the filesystem storage collaborator
//   4. Reload into a fresh store and verify round-trip fidelity
//   5. Feed the store a corrupt file and verify it keeps its contents
//   6. Check the JSONL event log picks up the lifecycle events

use std::fs;

use quest_goal::{EventDispatcher, LogSink, QuestEvent};
use quest_store::{FsStorage, GoalStore, StoreError, TextStorage};
use tempfile::TempDir;

/// Full tracking flow — from goal creation to reload after corruption.
#[test]
fn goal_flow_create_to_reload() {
    let project = TempDir::new().unwrap();
    let storage = FsStorage::new(project.path()).unwrap();

    // =========================================================
    // 1. Create goals of every kind
    // =========================================================

    let mut store = GoalStore::new();
    store
        .add_simple("Run a marathon", "Finish a full marathon", 1000)
        .unwrap();
    store.add_eternal("Read Scripture", "Daily reading", 100).unwrap();
    store
        .add_checklist("Attend the temple", "Monthly attendance", 50, 3, 20)
        .unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.score(), 0);

    // =========================================================
    // 2. Record events; the checklist pays its bonus on the
    //    event that reaches the target
    // =========================================================

    assert_eq!(store.record_event(1).unwrap(), 1000);
    assert_eq!(store.record_event(2).unwrap(), 100);
    assert_eq!(store.record_event(3).unwrap(), 50);
    assert_eq!(store.record_event(3).unwrap(), 50);
    assert_eq!(store.record_event(3).unwrap(), 70);
    assert_eq!(store.score(), 1270);

    let details = store.list_details();
    assert_eq!(details[0], "[X] Run a marathon (Finish a full marathon)");
    assert_eq!(details[1], "[ ] Read Scripture (Daily reading)");
    assert_eq!(
        details[2],
        "[X] Attend the temple (Monthly attendance) -- Currently completed: 3/3"
    );

    // =========================================================
    // 3. Save through storage
    // =========================================================

    store.save_to(&storage, ".quest/goals.txt").unwrap();
    let saved = storage.read_text(".quest/goals.txt").unwrap();
    assert!(saved.starts_with("1270\n"));
    assert!(saved.contains("ChecklistGoal:Attend the temple,Monthly attendance,50,3,20,3"));

    // =========================================================
    // 4. Reload into a fresh store
    // =========================================================

    let mut restored = GoalStore::new();
    restored.load_from(&storage, ".quest/goals.txt").unwrap();
    assert_eq!(restored.score(), 1270);
    assert_eq!(restored.goals(), store.goals());

    // The restored checklist is past its target: further events pay
    // base points only.
    assert_eq!(restored.record_event(3).unwrap(), 50);
    assert_eq!(restored.score(), 1320);

    // =========================================================
    // 5. A corrupt file never clears the store
    // =========================================================

    storage
        .write_text(".quest/goals.txt", "oops, not a score\n")
        .unwrap();
    let err = restored.load_from(&storage, ".quest/goals.txt").unwrap_err();
    assert!(matches!(err, StoreError::Format(_)));
    assert_eq!(restored.len(), 3);
    assert_eq!(restored.score(), 1320);
}

/// The JSONL event log receives one line per dispatched event.
#[test]
fn event_log_records_the_lifecycle() {
    let project = TempDir::new().unwrap();
    let log_path = project.path().join(".quest/events.jsonl");

    let mut events = EventDispatcher::new();
    events.add_sink(Box::new(LogSink::new(&log_path)));

    events.dispatch(&QuestEvent::goal_created("Read Scripture", "checklist"));
    events.dispatch(&QuestEvent::event_recorded("Read Scripture", 70, 170));
    events.dispatch(&QuestEvent::goal_completed("Read Scripture"));
    events.dispatch(&QuestEvent::goals_saved(1, 170));

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("\"goal_created\""));
    assert!(lines[1].contains("\"points_awarded\":70"));
    assert!(lines[2].contains("\"goal_completed\""));
    assert!(lines[3].contains("\"goals_saved\""));
}

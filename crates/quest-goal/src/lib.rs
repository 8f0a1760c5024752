//! # quest-goal
//!
//! Goal records and scoring for the Quest tracker.
//!
//! A goal pairs a name, description, and point value with one of three
//! completion behaviors:
//!
//! - [`GoalKind::Simple`] — done once, then stays done
//! - [`GoalKind::Eternal`] — never completes; every event pays out
//! - [`GoalKind::Checklist`] — completes after a target number of events,
//!   paying a one-time bonus on the event that reaches the target
//!
//! ## Key components
//!
//! - [`GoalRecord`] — the tagged-variant goal entity
//! - [`ScoreLedger`] — the running point total
//! - [`QuestEvent`] — events emitted at key lifecycle points
//! - [`EventDispatcher`] — dispatches events to notification sinks
//! - [`NotificationSink`] — trait for receiving events (log file, etc.)

pub mod error;
pub mod events;
pub mod goal;
pub mod ledger;

pub use error::{EventError, ValidationError};
pub use events::{EventDispatcher, LogSink, NotificationSink, QuestEvent};
pub use goal::{GoalKind, GoalRecord};
pub use ledger::ScoreLedger;

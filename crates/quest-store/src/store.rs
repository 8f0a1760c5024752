// store.rs — GoalStore: the single owner of goals and score.
//
// The frontend holds one GoalStore and calls through it; goals and the
// ledger are never handed out mutably, so every mutation takes this one
// path. Loading decodes into temporaries first and swaps only on
// success — a malformed file never empties the store.

use quest_codec::{decode, encode};
use quest_goal::{GoalRecord, ScoreLedger};

use crate::error::StoreError;
use crate::storage::TextStorage;

/// Owns the ordered goal list and the score ledger.
///
/// Goal indices in the public interface are 1-based, matching how the
/// list is displayed.
#[derive(Debug, Default)]
pub struct GoalStore {
    goals: Vec<GoalRecord>,
    ledger: ScoreLedger,
}

impl GoalStore {
    /// Create an empty store with a zero score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a simple (complete-once) goal.
    pub fn add_simple(
        &mut self,
        name: &str,
        description: &str,
        base_points: i64,
    ) -> Result<&GoalRecord, StoreError> {
        let record = GoalRecord::simple(name, description, base_points)?;
        Ok(self.push_record(record))
    }

    /// Add an eternal goal.
    pub fn add_eternal(
        &mut self,
        name: &str,
        description: &str,
        base_points: i64,
    ) -> Result<&GoalRecord, StoreError> {
        let record = GoalRecord::eternal(name, description, base_points)?;
        Ok(self.push_record(record))
    }

    /// Add a checklist goal that completes after `target` events.
    pub fn add_checklist(
        &mut self,
        name: &str,
        description: &str,
        base_points: i64,
        target: u32,
        bonus: i64,
    ) -> Result<&GoalRecord, StoreError> {
        let record = GoalRecord::checklist(name, description, base_points, target, bonus)?;
        Ok(self.push_record(record))
    }

    fn push_record(&mut self, record: GoalRecord) -> &GoalRecord {
        self.goals.push(record);
        &self.goals[self.goals.len() - 1]
    }

    /// All goals in insertion order.
    pub fn goals(&self) -> &[GoalRecord] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// The current score.
    pub fn score(&self) -> i64 {
        self.ledger.current()
    }

    /// Status lines for every goal, in insertion order.
    pub fn list_details(&self) -> Vec<String> {
        self.goals.iter().map(GoalRecord::details_line).collect()
    }

    /// Goal names only, in insertion order.
    pub fn list_names(&self) -> Vec<String> {
        self.goals.iter().map(|g| g.name().to_string()).collect()
    }

    /// Record one unit of progress against the goal at `index` (1-based).
    ///
    /// Applies the goal's payout to the ledger and returns the points
    /// awarded. An out-of-range index mutates nothing.
    pub fn record_event(&mut self, index: usize) -> Result<i64, StoreError> {
        let len = self.goals.len();
        let goal = index
            .checked_sub(1)
            .and_then(|i| self.goals.get_mut(i))
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        goal.record_event();
        let points = goal.points_for_event();
        self.ledger.apply_delta(points);
        Ok(points)
    }

    /// Render the full store (score and goals) to persisted text.
    pub fn save(&self) -> String {
        encode(self.ledger.current(), &self.goals)
    }

    /// Replace the store contents from persisted text.
    ///
    /// Decoding happens into temporaries; on failure the store keeps its
    /// previous goals and score.
    pub fn load(&mut self, text: &str) -> Result<(), StoreError> {
        let (score, goals) = decode(text)?;
        self.goals = goals;
        self.ledger = ScoreLedger::with_total(score);
        Ok(())
    }

    /// Save through the storage collaborator under `name`.
    pub fn save_to(&self, storage: &dyn TextStorage, name: &str) -> Result<(), StoreError> {
        storage.write_text(name, &self.save())?;
        Ok(())
    }

    /// Replace the store from the storage collaborator's file `name`.
    pub fn load_from(&mut self, storage: &dyn TextStorage, name: &str) -> Result<(), StoreError> {
        let text = storage.read_text(name)?;
        self.load(&text)
    }
}

// goal.rs — GoalRecord: the tagged-variant goal entity.
//
// Every goal carries a name, a description, and a base point value.
// The variant tag fixes the completion behavior at construction time
// and never changes afterwards; only the per-variant state fields do.

use crate::error::ValidationError;

/// The variant tag of a goal, with its per-variant state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalKind {
    /// Completed once, then stays completed.
    Simple { completed: bool },

    /// Never completes; every recorded event pays the base points.
    Eternal,

    /// Completes after `target` events. The event that brings the count
    /// to exactly `target` pays `bonus` on top of the base points; the
    /// count keeps climbing past the target if events keep coming.
    Checklist {
        target: u32,
        bonus: i64,
        completed_count: u32,
    },
}

impl GoalKind {
    /// Short lowercase label for the variant.
    pub fn label(&self) -> &'static str {
        match self {
            GoalKind::Simple { .. } => "simple",
            GoalKind::Eternal => "eternal",
            GoalKind::Checklist { .. } => "checklist",
        }
    }
}

/// One goal and its completion state.
///
/// Constructed through [`simple`](GoalRecord::simple),
/// [`eternal`](GoalRecord::eternal), or
/// [`checklist`](GoalRecord::checklist), which validate the input, or
/// rebuilt from persisted state with [`from_saved`](GoalRecord::from_saved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalRecord {
    name: String,
    description: String,
    base_points: i64,
    kind: GoalKind,
}

impl GoalRecord {
    /// Create a simple (complete-once) goal.
    pub fn simple(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
    ) -> Result<Self, ValidationError> {
        Self::validated(name, description, base_points, GoalKind::Simple { completed: false })
    }

    /// Create an eternal goal.
    pub fn eternal(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
    ) -> Result<Self, ValidationError> {
        Self::validated(name, description, base_points, GoalKind::Eternal)
    }

    /// Create a checklist goal that completes after `target` events.
    pub fn checklist(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
        target: u32,
        bonus: i64,
    ) -> Result<Self, ValidationError> {
        if target == 0 {
            return Err(ValidationError::ZeroTarget);
        }
        if bonus < 0 {
            return Err(ValidationError::NegativeBonus(bonus));
        }
        Self::validated(
            name,
            description,
            base_points,
            GoalKind::Checklist {
                target,
                bonus,
                completed_count: 0,
            },
        )
    }

    /// Rebuild a record from previously persisted state.
    ///
    /// Skips the construction checks; persisted state is taken as-is.
    pub fn from_saved(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
        kind: GoalKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            base_points,
            kind,
        }
    }

    fn validated(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
        kind: GoalKind,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            description: description.into(),
            base_points,
            kind,
        })
    }

    /// Apply one unit of progress.
    ///
    /// Simple goals become (and stay) completed, eternal goals don't
    /// change, checklist goals count up without an upper bound.
    pub fn record_event(&mut self) {
        match &mut self.kind {
            GoalKind::Simple { completed } => *completed = true,
            GoalKind::Eternal => {}
            GoalKind::Checklist { completed_count, .. } => *completed_count += 1,
        }
    }

    /// Whether the goal counts as completed right now.
    pub fn is_complete(&self) -> bool {
        match &self.kind {
            GoalKind::Simple { completed } => *completed,
            GoalKind::Eternal => false,
            GoalKind::Checklist {
                target,
                completed_count,
                ..
            } => completed_count >= target,
        }
    }

    /// Points to award for the most recent [`record_event`](Self::record_event).
    ///
    /// A checklist pays `base_points + bonus` only while its count sits
    /// exactly on the target; every other call (including ones past the
    /// target) pays the base points alone.
    pub fn points_for_event(&self) -> i64 {
        match &self.kind {
            GoalKind::Checklist {
                target,
                bonus,
                completed_count,
            } if completed_count == target => self.base_points + bonus,
            _ => self.base_points,
        }
    }

    /// Human-readable status line: `[X]`/`[ ]` marker, name, description,
    /// and the count/target progress for checklists.
    pub fn details_line(&self) -> String {
        let marker = if self.is_complete() { 'X' } else { ' ' };
        match &self.kind {
            GoalKind::Checklist {
                target,
                completed_count,
                ..
            } => format!(
                "[{marker}] {} ({}) -- Currently completed: {completed_count}/{target}",
                self.name, self.description
            ),
            _ => format!("[{marker}] {} ({})", self.name, self.description),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn base_points(&self) -> i64 {
        self.base_points
    }

    pub fn kind(&self) -> &GoalKind {
        &self.kind
    }
}

//! The inline-edit state machine for a single goal field.
//!
//! A field is either displayed or being edited. `begin` moves it into the
//! editing state by capturing the field's current text; the draft itself
//! lives in the view layer's input buffer. `commit` and `cancel` both consume
//! the edit, so a finished edit cannot be reused.

use crate::model::GoalField;
use crate::state::{Dashboard, GoalUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEdit {
    goal_id: u64,
    field: GoalField,
    original: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    /// The goal disappeared between `begin` and `commit`. Silent no-op.
    UnknownGoal,
    /// The draft does not parse as an integer for a numeric field. The
    /// stored value is unchanged and the draft is handed back for display.
    RejectedNumber { draft: String },
}

impl InlineEdit {
    /// Captures the field's current text and enters the editing state.
    /// Returns `None` when the goal id does not resolve.
    pub fn begin(state: &Dashboard, goal_id: u64, field: GoalField) -> Option<Self> {
        let original = state.field_text(goal_id, field)?;
        Some(Self {
            goal_id,
            field,
            original,
        })
    }

    pub fn goal_id(&self) -> u64 {
        self.goal_id
    }

    pub fn field(&self) -> GoalField {
        self.field
    }

    /// The text the field showed when the edit began. Pre-fills the input.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Writes the draft through to the state store and leaves the editing
    /// state. Once applied, the original value is gone; there is no undo.
    pub fn commit(self, state: &mut Dashboard, draft: &str) -> CommitOutcome {
        match state.update_goal_field(self.goal_id, self.field, draft) {
            GoalUpdate::Applied => CommitOutcome::Applied,
            GoalUpdate::UnknownGoal => CommitOutcome::UnknownGoal,
            GoalUpdate::RejectedNumber => CommitOutcome::RejectedNumber {
                draft: draft.to_string(),
            },
        }
    }

    /// Discards the draft. The state store is never touched.
    pub fn cancel(self) {}
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn begin_captures_the_displayed_text() {
        let state = Dashboard::seeded();
        let id = state.goals()[0].id;

        let edit = InlineEdit::begin(&state, id, GoalField::Current).unwrap();
        assert_eq!(edit.original(), "12");

        let edit = InlineEdit::begin(&state, id, GoalField::Title).unwrap();
        assert_eq!(edit.original(), "Read 24 books this year");
    }

    #[test]
    fn begin_on_unknown_goal_returns_none() {
        let state = Dashboard::seeded();
        assert!(InlineEdit::begin(&state, 9999, GoalField::Title).is_none());
    }

    #[test]
    fn commit_recomputes_progress_from_the_new_target() {
        let mut state = Dashboard::seeded();
        let id = state.goals()[0].id;
        assert_eq!(state.goal(id).unwrap().progress_percent(), 50);

        let edit = InlineEdit::begin(&state, id, GoalField::Target).unwrap();
        assert_eq!(edit.commit(&mut state, "48"), CommitOutcome::Applied);
        assert_eq!(state.goal(id).unwrap().progress_percent(), 25);
    }

    #[test]
    fn commit_is_irrevocable() {
        let mut state = Dashboard::seeded();
        let id = state.goals()[0].id;

        let edit = InlineEdit::begin(&state, id, GoalField::Target).unwrap();
        edit.commit(&mut state, "50");

        // A fresh edit sees only the committed value.
        let edit = InlineEdit::begin(&state, id, GoalField::Target).unwrap();
        assert_eq!(edit.original(), "50");
    }

    #[test]
    fn cancel_leaves_the_state_untouched() {
        let mut state = Dashboard::seeded();
        let id = state.goals()[0].id;
        let before = state.goal(id).unwrap().clone();

        let edit = InlineEdit::begin(&state, id, GoalField::Title).unwrap();
        edit.cancel();
        assert_eq!(state.goal(id).unwrap(), &before);
        // Still mutable afterwards; the borrow ended with the edit.
        state.set_mood(crate::model::Mood::Neutral);
    }

    #[test]
    fn rejected_draft_is_returned_for_display() {
        let mut state = Dashboard::seeded();
        let id = state.goals()[0].id;

        let edit = InlineEdit::begin(&state, id, GoalField::Current).unwrap();
        let outcome = edit.commit(&mut state, "a dozen");
        assert_eq!(
            outcome,
            CommitOutcome::RejectedNumber {
                draft: "a dozen".to_string()
            }
        );
        assert_eq!(state.goal(id).unwrap().current, 12);
    }
}

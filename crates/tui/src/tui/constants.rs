use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(200);

// Toast lifetime: fully visible, then rendered dim for the fade window,
// then cleared on the next tick. Overlapping toasts overwrite; no queue.
pub(crate) const TOAST_VISIBLE: Duration = Duration::from_millis(2000);
pub(crate) const TOAST_FADE: Duration = Duration::from_millis(300);

pub(crate) const TOAST_THEME_UPDATED: &str = "Theme updated successfully!";
pub(crate) const TOAST_COLOR_UPDATED: &str = "Color theme updated!";
pub(crate) const TOAST_GOAL_UPDATED: &str = "Goal updated successfully!";
pub(crate) const TOAST_TASK_UPDATED: &str = "Task updated!";
pub(crate) const TOAST_MOOD_LOGGED: &str = "Mood logged successfully!";
pub(crate) const TOAST_COACH_MESSAGED: &str = "Message sent to coach!";

pub(crate) const HINT_GOALS_ONLY: &str = "Switch to the goals panel to edit a goal";
pub(crate) const HINT_NO_GOALS: &str = "No goals yet — press 'a' to add one";
pub(crate) const HINT_NO_TASKS: &str = "No tasks yet — press 'a' to add one";

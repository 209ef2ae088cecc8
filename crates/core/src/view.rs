//! Pure projections of the dashboard state. The TUI rebuilds its widgets from
//! these rows on every frame; nothing here retains state between calls.

use crate::model::PaletteKey;
use crate::state::Dashboard;

#[derive(Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub id: u64,
    pub title: String,
    pub current: i64,
    pub target: i64,
    /// Rounded percentage, deliberately not clamped: a goal past its target
    /// reads above 100.
    pub percent: i64,
    /// Bar fill in `[0.0, 1.0]`. Only the fill is clamped so the gauge never
    /// overflows its width.
    pub fill: f64,
    pub color: PaletteKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

pub fn goal_rows(state: &Dashboard) -> Vec<GoalRow> {
    state
        .goals()
        .iter()
        .map(|goal| {
            let percent = goal.progress_percent();
            GoalRow {
                id: goal.id,
                title: goal.title.clone(),
                current: goal.current,
                target: goal.target,
                percent,
                fill: percent.clamp(0, 100) as f64 / 100.0,
                color: goal.color,
            }
        })
        .collect()
}

pub fn task_rows(state: &Dashboard) -> Vec<TaskRow> {
    state
        .tasks()
        .iter()
        .map(|task| TaskRow {
            id: task.id,
            title: task.title.clone(),
            completed: task.completed,
        })
        .collect()
}

/// The `"<completed>/<total>"` counter shown on the task panel.
pub fn task_counter(state: &Dashboard) -> String {
    let completed = state.tasks().iter().filter(|t| t.completed).count();
    format!("{}/{}", completed, state.tasks().len())
}

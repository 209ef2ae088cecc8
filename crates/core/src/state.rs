use crate::model::{Goal, GoalField, Mood, PaletteKey, Task};

/// Result of applying an inline-edit value to a goal field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalUpdate {
    Applied,
    /// The goal id no longer resolves. Treated as a silent no-op; it cannot
    /// happen in normal flow since goals are never deleted.
    UnknownGoal,
    /// A numeric field received text that does not parse as an integer. The
    /// stored value is left untouched.
    RejectedNumber,
}

/// The single in-memory state object behind the dashboard. Goals and tasks
/// live only for the session; preferences are persisted elsewhere.
#[derive(Debug, Clone)]
pub struct Dashboard {
    goals: Vec<Goal>,
    tasks: Vec<Task>,
    current_mood: Mood,
    next_id: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            goals: Vec::new(),
            tasks: Vec::new(),
            current_mood: Mood::Happy,
            next_id: 1,
        }
    }

    /// The starter goals and checklist shown on every launch.
    pub fn seeded() -> Self {
        let mut state = Self::new();

        let goals = [
            ("Read 24 books this year", 12, 24, PaletteKey::Blue),
            ("Exercise 150 times", 89, 150, PaletteKey::Emerald),
            ("Learn Spanish", 32, 100, PaletteKey::Violet),
        ];
        for (title, current, target, color) in goals {
            let id = state.fresh_id();
            state.goals.push(Goal {
                id,
                title: title.to_string(),
                current,
                target,
                color,
            });
        }

        let tasks = [
            ("Morning workout", true),
            ("Review Spanish flashcards", true),
            ("Read 25 pages", true),
            ("Prepare presentation", false),
            ("Call mom", false),
            ("Plan weekend trip", false),
            ("Write journal entry", false),
        ];
        for (title, completed) in tasks {
            let id = state.fresh_id();
            state.tasks.push(Task {
                id,
                title: title.to_string(),
                completed,
            });
        }

        state
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn mood(&self) -> Mood {
        self.current_mood
    }

    pub fn goal(&self, id: u64) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Appends a goal with `current = 0`. Returns `None` without mutating
    /// anything when the trimmed title is empty, the target is absent or
    /// non-positive, or no color was chosen.
    pub fn add_goal(
        &mut self,
        title: &str,
        target: Option<i64>,
        color: Option<PaletteKey>,
    ) -> Option<&Goal> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let target = target.filter(|t| *t > 0)?;
        let color = color?;

        let id = self.fresh_id();
        self.goals.push(Goal {
            id,
            title: title.to_string(),
            current: 0,
            target,
            color,
        });
        self.goals.last()
    }

    /// Appends an uncompleted task, or returns `None` for a blank title.
    pub fn add_task(&mut self, title: &str) -> Option<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let id = self.fresh_id();
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            completed: false,
        });
        self.tasks.last()
    }

    /// Writes raw edit text into a goal field. Numeric fields parse the text
    /// as an integer and reject it otherwise; the title keeps the text as-is.
    pub fn update_goal_field(&mut self, id: u64, field: GoalField, raw: &str) -> GoalUpdate {
        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == id) else {
            return GoalUpdate::UnknownGoal;
        };

        match field {
            GoalField::Title => goal.title = raw.to_string(),
            GoalField::Current => match raw.trim().parse::<i64>() {
                Ok(value) => goal.current = value,
                Err(_) => return GoalUpdate::RejectedNumber,
            },
            GoalField::Target => match raw.trim().parse::<i64>() {
                Ok(value) => goal.target = value,
                Err(_) => return GoalUpdate::RejectedNumber,
            },
        }

        GoalUpdate::Applied
    }

    /// The current display text of a goal field, as an edit would capture it.
    pub fn field_text(&self, id: u64, field: GoalField) -> Option<String> {
        let goal = self.goal(id)?;
        Some(match field {
            GoalField::Title => goal.title.clone(),
            GoalField::Current => goal.current.to_string(),
            GoalField::Target => goal.target.to_string(),
        })
    }

    /// Flips a task's completion. Returns `false` (no-op) for unknown ids.
    pub fn toggle_task(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.current_mood = mood;
    }

    fn fresh_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

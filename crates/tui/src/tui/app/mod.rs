use std::time::Instant;

use anyhow::Result;
use ratatui::widgets::ListState;

use daypulse_core::edit::{CommitOutcome, InlineEdit};
use daypulse_core::model::{GoalField, Mood, PaletteKey, QuickAction, Theme};
use daypulse_core::prefs::{PrefStore, KEY_COLOR_VARIANT, KEY_THEME};
use daypulse_core::state::Dashboard;

use super::buffer::TextBuffer;
use super::constants::*;
use crate::config::AppConfig;

mod input;
mod render;
#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Goals,
    Tasks,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::Goals => Focus::Tasks,
            Focus::Tasks => Focus::Goals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    AddGoal,
    AddTask,
    EditGoal,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum GoalFormField {
    #[default]
    Title,
    Target,
    Color,
}

impl GoalFormField {
    fn next(self) -> Self {
        match self {
            GoalFormField::Title => GoalFormField::Target,
            GoalFormField::Target => GoalFormField::Color,
            GoalFormField::Color => GoalFormField::Title,
        }
    }

    fn prev(self) -> Self {
        self.next().next()
    }
}

/// The goal-creation dialog. Values survive a cancel, like the browser
/// modal it stands in for; only a successful submit resets them.
#[derive(Debug, Default)]
struct GoalForm {
    title: TextBuffer,
    target: TextBuffer,
    color: Option<PaletteKey>,
    active: GoalFormField,
}

impl GoalForm {
    fn reset(&mut self) {
        self.title.clear();
        self.target.clear();
        self.color = None;
        self.active = GoalFormField::Title;
    }

    fn active_buffer(&mut self) -> Option<&mut TextBuffer> {
        match self.active {
            GoalFormField::Title => Some(&mut self.title),
            GoalFormField::Target => Some(&mut self.target),
            GoalFormField::Color => None,
        }
    }

    fn color_next(&mut self) {
        self.color = Some(match self.color {
            None => PaletteKey::Blue,
            Some(key) => key.next(),
        });
    }

    fn color_prev(&mut self) {
        self.color = Some(match self.color {
            None => PaletteKey::Rose,
            // Three steps forward in a four-cycle.
            Some(key) => key.next().next().next(),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    text: String,
    kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    fn new<T: Into<String>>(text: T, kind: ToastKind) -> Self {
        Self {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    fn is_fading(&self) -> bool {
        self.shown_at.elapsed() > TOAST_VISIBLE
    }

    fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > TOAST_VISIBLE + TOAST_FADE
    }
}

pub(crate) struct App {
    config: AppConfig,
    prefs: PrefStore,
    state: Dashboard,
    theme: Theme,
    color_variant: PaletteKey,
    focus: Focus,
    goal_selected: usize,
    task_selected: usize,
    task_list_state: ListState,
    input_mode: InputMode,
    goal_form: GoalForm,
    task_title: TextBuffer,
    edit: Option<InlineEdit>,
    edit_input: TextBuffer,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(config: AppConfig) -> Self {
        let prefs = PrefStore::open(config.prefs_path());
        let theme = prefs
            .get(KEY_THEME)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(Theme::Light);
        let color_variant = prefs
            .get(KEY_COLOR_VARIANT)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(PaletteKey::Blue);

        let mut app = Self {
            config,
            prefs,
            state: Dashboard::seeded(),
            theme,
            color_variant,
            focus: Focus::Goals,
            goal_selected: 0,
            task_selected: 0,
            task_list_state: ListState::default(),
            input_mode: InputMode::Normal,
            goal_form: GoalForm::default(),
            task_title: TextBuffer::new(),
            edit: None,
            edit_input: TextBuffer::new(),
            toast: None,
            should_quit: false,
        };
        app.sync_task_selection();
        app
    }

    pub(crate) fn on_tick(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn show_toast<T: Into<String>>(&mut self, message: T) {
        self.toast = Some(Toast::new(message, ToastKind::Info));
    }

    fn show_error_toast<T: Into<String>>(&mut self, message: T) {
        self.toast = Some(Toast::new(message, ToastKind::Error));
    }

    fn selected_goal_id(&self) -> Option<u64> {
        self.state.goals().get(self.goal_selected).map(|g| g.id)
    }

    fn selected_task_id(&self) -> Option<u64> {
        self.state.tasks().get(self.task_selected).map(|t| t.id)
    }

    fn sync_task_selection(&mut self) {
        if self.state.tasks().is_empty() {
            self.task_selected = 0;
            self.task_list_state.select(None);
        } else {
            if self.task_selected >= self.state.tasks().len() {
                self.task_selected = self.state.tasks().len() - 1;
            }
            self.task_list_state.select(Some(self.task_selected));
        }
    }

    fn switch_focus(&mut self) {
        self.focus = self.focus.toggled();
    }

    fn select_next(&mut self) {
        match self.focus {
            Focus::Goals => {
                if !self.state.goals().is_empty() {
                    self.goal_selected =
                        (self.goal_selected + 1).min(self.state.goals().len() - 1);
                }
            }
            Focus::Tasks => {
                if !self.state.tasks().is_empty() {
                    self.task_selected =
                        (self.task_selected + 1).min(self.state.tasks().len() - 1);
                    self.task_list_state.select(Some(self.task_selected));
                }
            }
        }
    }

    fn select_prev(&mut self) {
        match self.focus {
            Focus::Goals => {
                self.goal_selected = self.goal_selected.saturating_sub(1);
            }
            Focus::Tasks => {
                self.task_selected = self.task_selected.saturating_sub(1);
                if !self.state.tasks().is_empty() {
                    self.task_list_state.select(Some(self.task_selected));
                }
            }
        }
    }

    fn select_first(&mut self) {
        match self.focus {
            Focus::Goals => self.goal_selected = 0,
            Focus::Tasks => {
                self.task_selected = 0;
                self.sync_task_selection();
            }
        }
    }

    fn select_last(&mut self) {
        match self.focus {
            Focus::Goals => {
                self.goal_selected = self.state.goals().len().saturating_sub(1);
            }
            Focus::Tasks => {
                self.task_selected = self.state.tasks().len().saturating_sub(1);
                self.sync_task_selection();
            }
        }
    }

    fn toggle_theme(&mut self) -> Result<()> {
        self.theme = self.theme.toggled();
        self.prefs.set(KEY_THEME, self.theme.as_str())?;
        self.show_toast(TOAST_THEME_UPDATED);
        Ok(())
    }

    fn cycle_color_variant(&mut self) -> Result<()> {
        self.color_variant = self.color_variant.next();
        self.prefs
            .set(KEY_COLOR_VARIANT, self.color_variant.as_str())?;
        self.show_toast(TOAST_COLOR_UPDATED);
        Ok(())
    }

    fn set_mood(&mut self, mood: Mood) {
        self.state.set_mood(mood);
        self.show_toast(TOAST_MOOD_LOGGED);
    }

    fn quick_action(&mut self, action: QuickAction) {
        self.show_toast(format!("{} logged!", action.label()));
    }

    fn message_coach(&mut self) {
        self.show_toast(TOAST_COACH_MESSAGED);
    }

    fn open_add_form(&mut self) {
        match self.focus {
            Focus::Goals => {
                self.goal_form.reset();
                self.input_mode = InputMode::AddGoal;
            }
            Focus::Tasks => {
                self.task_title.clear();
                self.input_mode = InputMode::AddTask;
            }
        }
    }

    /// Submit the goal-creation dialog. Invalid input leaves the dialog open
    /// with no feedback; that silent rejection is intentional.
    fn submit_goal_form(&mut self) {
        let target = self.goal_form.target.as_str().trim().parse::<i64>().ok();
        let added = self
            .state
            .add_goal(self.goal_form.title.as_str(), target, self.goal_form.color)
            .is_some();

        if added {
            self.goal_form.reset();
            self.input_mode = InputMode::Normal;
            self.goal_selected = self.state.goals().len() - 1;
        }
    }

    fn submit_task_form(&mut self) {
        let added = self.state.add_task(self.task_title.as_str()).is_some();

        if added {
            self.task_title.clear();
            self.input_mode = InputMode::Normal;
            self.task_selected = self.state.tasks().len() - 1;
            self.sync_task_selection();
        }
    }

    fn begin_edit(&mut self, field: GoalField) {
        if self.focus != Focus::Goals {
            self.show_toast(HINT_GOALS_ONLY);
            return;
        }
        let Some(goal_id) = self.selected_goal_id() else {
            self.show_toast(HINT_NO_GOALS);
            return;
        };

        if let Some(edit) = InlineEdit::begin(&self.state, goal_id, field) {
            self.edit_input.set(edit.original());
            self.edit = Some(edit);
            self.input_mode = InputMode::EditGoal;
        }
    }

    fn commit_edit(&mut self) {
        let Some(edit) = self.edit.take() else {
            self.input_mode = InputMode::Normal;
            return;
        };

        match edit.commit(&mut self.state, self.edit_input.as_str()) {
            CommitOutcome::Applied => self.show_toast(TOAST_GOAL_UPDATED),
            // Unreachable without a delete operation; stay silent like the
            // state store does.
            CommitOutcome::UnknownGoal => {}
            CommitOutcome::RejectedNumber { draft } => {
                self.show_error_toast(format!("'{}' is not a number — edit discarded", draft));
            }
        }

        self.edit_input.clear();
        self.input_mode = InputMode::Normal;
    }

    fn cancel_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            edit.cancel();
        }
        self.edit_input.clear();
        self.input_mode = InputMode::Normal;
        self.toast = None;
    }

    fn toggle_selected_task(&mut self) {
        let Some(task_id) = self.selected_task_id() else {
            self.show_toast(HINT_NO_TASKS);
            return;
        };
        if self.state.toggle_task(task_id) {
            self.show_toast(TOAST_TASK_UPDATED);
        }
    }

    /// Enter/Space act on whatever the focused panel selects: a goal field
    /// begins a title edit, a task toggles.
    fn activate_selection(&mut self) {
        match self.focus {
            Focus::Goals => self.begin_edit(GoalField::Title),
            Focus::Tasks => self.toggle_selected_task(),
        }
    }
}

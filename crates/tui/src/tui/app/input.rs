use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use daypulse_core::model::{GoalField, Mood, QuickAction};

use super::{App, GoalFormField, InputMode};

#[derive(Debug, Clone, Copy)]
pub(crate) enum NormalAction {
    Quit,
    ToggleTheme,
    CycleColor,
    AddItem,
    EditTitle,
    EditCurrent,
    EditTarget,
    Activate,
    SetMood(Mood),
    QuickAction(QuickAction),
    MessageCoach,
    ShowHelp,
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    SwitchFocus,
}

impl NormalAction {
    fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('d') => Some(Self::ToggleTheme),
            KeyCode::Char('v') => Some(Self::CycleColor),
            KeyCode::Char('a') => Some(Self::AddItem),
            KeyCode::Char('e') => Some(Self::EditTitle),
            KeyCode::Char('u') => Some(Self::EditCurrent),
            KeyCode::Char('t') => Some(Self::EditTarget),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::Activate),
            KeyCode::Char('1') => Some(Self::SetMood(Mood::Amazing)),
            KeyCode::Char('2') => Some(Self::SetMood(Mood::Happy)),
            KeyCode::Char('3') => Some(Self::SetMood(Mood::Neutral)),
            KeyCode::Char('4') => Some(Self::SetMood(Mood::Sad)),
            KeyCode::Char('5') => Some(Self::SetMood(Mood::Stressed)),
            KeyCode::Char('r') => Some(Self::QuickAction(QuickAction::Reading)),
            KeyCode::Char('w') => Some(Self::QuickAction(QuickAction::Workout)),
            KeyCode::Char('p') => Some(Self::QuickAction(QuickAction::Spanish)),
            KeyCode::Char('m') => Some(Self::MessageCoach),
            KeyCode::Char('h') => Some(Self::ShowHelp),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::SelectPrev),
            KeyCode::Home => Some(Self::SelectFirst),
            KeyCode::End => Some(Self::SelectLast),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                Some(Self::SwitchFocus)
            }
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::AddGoal => {
                self.handle_add_goal_mode(key);
                Ok(())
            }
            InputMode::AddTask => {
                self.handle_add_task_mode(key);
                Ok(())
            }
            InputMode::EditGoal => {
                self.handle_edit_goal_mode(key);
                Ok(())
            }
            InputMode::Help => {
                self.handle_help_mode(key);
                Ok(())
            }
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(action) = NormalAction::from_event(&key) {
            self.execute_normal_action(action)?;
        }
        Ok(())
    }

    fn execute_normal_action(&mut self, action: NormalAction) -> Result<()> {
        match action {
            NormalAction::Quit => {
                self.should_quit = true;
            }
            NormalAction::ToggleTheme => {
                self.toggle_theme()?;
            }
            NormalAction::CycleColor => {
                self.cycle_color_variant()?;
            }
            NormalAction::AddItem => {
                self.open_add_form();
            }
            NormalAction::EditTitle => {
                self.begin_edit(GoalField::Title);
            }
            NormalAction::EditCurrent => {
                self.begin_edit(GoalField::Current);
            }
            NormalAction::EditTarget => {
                self.begin_edit(GoalField::Target);
            }
            NormalAction::Activate => {
                self.activate_selection();
            }
            NormalAction::SetMood(mood) => {
                self.set_mood(mood);
            }
            NormalAction::QuickAction(action) => {
                self.quick_action(action);
            }
            NormalAction::MessageCoach => {
                self.message_coach();
            }
            NormalAction::ShowHelp => {
                self.input_mode = InputMode::Help;
            }
            NormalAction::SelectNext => self.select_next(),
            NormalAction::SelectPrev => self.select_prev(),
            NormalAction::SelectFirst => self.select_first(),
            NormalAction::SelectLast => self.select_last(),
            NormalAction::SwitchFocus => self.switch_focus(),
        }
        Ok(())
    }

    fn handle_add_goal_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_goal_form(),
            // Cancel keeps the typed values, as the modal it mirrors does.
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.goal_form.active = self.goal_form.active.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.goal_form.active = self.goal_form.active.prev();
            }
            KeyCode::Left => {
                if self.goal_form.active == GoalFormField::Color {
                    self.goal_form.color_prev();
                } else if let Some(buffer) = self.goal_form.active_buffer() {
                    buffer.move_left();
                }
            }
            KeyCode::Right => {
                if self.goal_form.active == GoalFormField::Color {
                    self.goal_form.color_next();
                } else if let Some(buffer) = self.goal_form.active_buffer() {
                    buffer.move_right();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.goal_form.active_buffer() {
                    buffer.insert_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.goal_form.active_buffer() {
                    buffer.backspace();
                }
            }
            KeyCode::Delete => {
                if let Some(buffer) = self.goal_form.active_buffer() {
                    buffer.delete_char();
                }
            }
            KeyCode::Home => {
                if let Some(buffer) = self.goal_form.active_buffer() {
                    buffer.move_home();
                }
            }
            KeyCode::End => {
                if let Some(buffer) = self.goal_form.active_buffer() {
                    buffer.move_end();
                }
            }
            _ => {}
        }
    }

    fn handle_add_task_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task_form(),
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Char(c) => self.task_title.insert_char(c),
            KeyCode::Backspace => self.task_title.backspace(),
            KeyCode::Delete => self.task_title.delete_char(),
            KeyCode::Left => self.task_title.move_left(),
            KeyCode::Right => self.task_title.move_right(),
            KeyCode::Home => self.task_title.move_home(),
            KeyCode::End => self.task_title.move_end(),
            _ => {}
        }
    }

    fn handle_edit_goal_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Char(c) => self.edit_input.insert_char(c),
            KeyCode::Backspace => self.edit_input.backspace(),
            KeyCode::Delete => self.edit_input.delete_char(),
            KeyCode::Left => self.edit_input.move_left(),
            KeyCode::Right => self.edit_input.move_right(),
            KeyCode::Home => self.edit_input.move_home(),
            KeyCode::End => self.edit_input.move_end(),
            _ => {}
        }
    }

    fn handle_help_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('h') | KeyCode::Char('q') => {
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }
}

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use daypulse_core::model::{Mood, PaletteKey, Theme};
use daypulse_core::prefs::{PrefStore, KEY_COLOR_VARIANT, KEY_THEME};
use daypulse_core::view;

use crate::config::AppConfig;
use crate::tui::constants::HINT_GOALS_ONLY;

use super::{App, Focus, InputMode, ToastKind};

fn test_app() -> (App, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::from_data_dir(dir.path().to_path_buf());
    (App::new(config), dir)
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::from(code)).unwrap();
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn toast_text(app: &App) -> Option<&str> {
    app.toast.as_ref().map(|t| t.text.as_str())
}

#[test]
fn theme_toggle_round_trips_the_persisted_preference() {
    let (mut app, dir) = test_app();
    assert_eq!(app.theme, Theme::Light);

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.theme, Theme::Dark);
    assert_eq!(toast_text(&app), Some("Theme updated successfully!"));

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.theme, Theme::Light);

    // The stored preference matches the final in-memory value exactly.
    let store = PrefStore::open(dir.path().join("prefs.json"));
    assert_eq!(store.get(KEY_THEME), Some(app.theme.as_str()));
}

#[test]
fn color_cycle_writes_the_preference_through() {
    let (mut app, dir) = test_app();
    assert_eq!(app.color_variant, PaletteKey::Blue);

    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.color_variant, PaletteKey::Violet);
    assert_eq!(toast_text(&app), Some("Color theme updated!"));

    let store = PrefStore::open(dir.path().join("prefs.json"));
    assert_eq!(store.get(KEY_COLOR_VARIANT), Some("violet"));
}

#[test]
fn preferences_survive_a_relaunch() {
    let (mut app, dir) = test_app();
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('v'));

    let config = AppConfig::from_data_dir(dir.path().to_path_buf());
    let relaunched = App::new(config);
    assert_eq!(relaunched.theme, Theme::Dark);
    assert_eq!(relaunched.color_variant, PaletteKey::Violet);
}

#[test]
fn editing_the_target_recomputes_progress() {
    let (mut app, _dir) = test_app();
    // Seeded first goal: 12/24 → 50%.
    assert_eq!(view::goal_rows(&app.state)[0].percent, 50);

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.input_mode, InputMode::EditGoal);
    assert_eq!(app.edit_input.as_str(), "24");

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "48");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(view::goal_rows(&app.state)[0].percent, 25);
    assert_eq!(toast_text(&app), Some("Goal updated successfully!"));
}

#[test]
fn committed_edits_cannot_be_taken_back() {
    let (mut app, _dir) = test_app();
    press(&mut app, KeyCode::Char('t'));
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "50");
    press(&mut app, KeyCode::Enter);

    // A fresh edit starts from the committed value, not the old one.
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.edit_input.as_str(), "50");
    press(&mut app, KeyCode::Esc);
}

#[test]
fn rejected_numeric_commit_keeps_the_old_value() {
    let (mut app, _dir) = test_app();

    press(&mut app, KeyCode::Char('u'));
    assert_eq!(app.edit_input.as_str(), "12");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "a dozen");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state.goals()[0].current, 12);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.toast.as_ref().map(|t| t.kind), Some(ToastKind::Error));
}

#[test]
fn escape_cancels_an_edit_without_committing() {
    let (mut app, _dir) = test_app();
    let before = app.state.goals()[0].title.clone();

    press(&mut app, KeyCode::Char('e'));
    type_str(&mut app, " and more");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.state.goals()[0].title, before);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.toast.is_none());
}

#[test]
fn edit_keys_require_the_goals_panel() {
    let (mut app, _dir) = test_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('e'));

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(toast_text(&app), Some(HINT_GOALS_ONLY));
}

#[test]
fn toggling_a_task_updates_the_counter_immediately() {
    let (mut app, _dir) = test_app();
    assert_eq!(view::task_counter(&app.state), "3/7");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(view::task_counter(&app.state), "2/7");
    assert_eq!(toast_text(&app), Some("Task updated!"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(view::task_counter(&app.state), "3/7");
}

#[test]
fn adding_a_task_through_the_form() {
    let (mut app, _dir) = test_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.input_mode, InputMode::AddTask);

    type_str(&mut app, "Stretch");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.state.tasks().len(), 8);
    assert_eq!(app.state.tasks().last().unwrap().title, "Stretch");
    assert_eq!(view::task_counter(&app.state), "3/8");
}

#[test]
fn blank_task_submit_keeps_the_dialog_open() {
    let (mut app, _dir) = test_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode, InputMode::AddTask);
    assert_eq!(app.state.tasks().len(), 7);
    assert!(app.toast.is_none());
}

#[test]
fn goal_form_happy_path_adds_and_closes() {
    let (mut app, _dir) = test_app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.input_mode, InputMode::AddGoal);

    type_str(&mut app, "Meditate daily");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "30");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode, InputMode::Normal);
    let goal = app.state.goals().last().unwrap();
    assert_eq!(goal.title, "Meditate daily");
    assert_eq!(goal.current, 0);
    assert_eq!(goal.target, 30);
    assert_eq!(goal.color, PaletteKey::Blue);
}

#[test]
fn invalid_goal_form_submit_is_silently_rejected() {
    let (mut app, _dir) = test_app();
    press(&mut app, KeyCode::Char('a'));

    // No title, no target, no color.
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::AddGoal);
    assert_eq!(app.state.goals().len(), 3);
    assert!(app.toast.is_none());

    // A title alone is still not enough.
    type_str(&mut app, "Read");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::AddGoal);
    assert_eq!(app.state.goals().len(), 3);
}

#[test]
fn mood_keys_set_the_sole_active_mood() {
    let (mut app, _dir) = test_app();
    assert_eq!(app.state.mood(), Mood::Happy);

    press(&mut app, KeyCode::Char('5'));
    assert_eq!(app.state.mood(), Mood::Stressed);
    assert_eq!(toast_text(&app), Some("Mood logged successfully!"));

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.state.mood(), Mood::Neutral);
}

#[test]
fn toasts_dim_for_the_fade_window_then_expire_on_tick() {
    let (mut app, _dir) = test_app();
    press(&mut app, KeyCode::Char('d'));

    // Fresh toasts are fully visible and survive ticks.
    assert!(!app.toast.as_ref().unwrap().is_fading());
    app.on_tick();
    assert!(app.toast.is_some());

    // Past the visible window but within the fade, the toast dims.
    app.toast.as_mut().unwrap().shown_at = Instant::now() - Duration::from_millis(2100);
    {
        let toast = app.toast.as_ref().unwrap();
        assert!(toast.is_fading());
        assert!(!toast.is_expired());
    }
    app.on_tick();
    assert!(app.toast.is_some());

    // Past the fade, the next tick clears it.
    app.toast.as_mut().unwrap().shown_at = Instant::now() - Duration::from_secs(3);
    app.on_tick();
    assert!(app.toast.is_none());
}

#[test]
fn a_new_toast_overwrites_the_current_one() {
    let (mut app, _dir) = test_app();
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(toast_text(&app), Some("Log Reading logged!"));

    press(&mut app, KeyCode::Char('w'));
    assert_eq!(toast_text(&app), Some("Log Workout logged!"));
    assert!(!app.toast.as_ref().unwrap().is_fading());
}

#[test]
fn horizontal_keys_switch_the_focused_panel() {
    let (mut app, _dir) = test_app();
    assert_eq!(app.focus, Focus::Goals);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.focus, Focus::Tasks);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.focus, Focus::Goals);
}

#[test]
fn quick_actions_toast_without_mutating_state() {
    let (mut app, _dir) = test_app();
    let goals_before = app.state.goals().to_vec();
    let tasks_before = app.state.tasks().to_vec();

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(toast_text(&app), Some("Log Reading logged!"));

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(toast_text(&app), Some("Message sent to coach!"));

    assert_eq!(app.state.goals(), goals_before.as_slice());
    assert_eq!(app.state.tasks(), tasks_before.as_slice());
}

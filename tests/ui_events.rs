use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use taskpad::config::Config;
use taskpad::constants;
use taskpad::ui::app::EditState;
use taskpad::ui::{handle_events, App};

fn press(app: &mut App, code: KeyCode) {
    let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
    handle_events(event, app).unwrap();
}

fn press_ctrl(app: &mut App, c: char) {
    let event = Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    handle_events(event, app).unwrap();
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add_task(app: &mut App, title: &str) {
    press(app, KeyCode::Char('a'));
    type_str(app, title);
    press(app, KeyCode::Enter);
}

fn variant_a() -> App {
    App::new(&Config::default())
}

fn variant_b() -> App {
    let mut config = Config::default();
    config.behavior.enforce_unique_titles = false;
    config.behavior.confirm_before_remove = false;
    config.behavior.allow_inline_edit = false;
    App::new(&config)
}

#[test]
fn test_add_task_flow() {
    let mut app = variant_a();

    add_task(&mut app, "Buy milk");

    assert!(!app.creating_task);
    assert!(app.new_task_title.is_empty());
    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.tasks()[0].title, "Buy milk");
    assert!(!app.store.tasks()[0].done);
}

#[test]
fn test_empty_submit_is_rejected() {
    let mut app = variant_a();

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.error_message.as_deref(), Some(constants::ERROR_EMPTY_TITLE));
    assert!(app.creating_task);
    assert!(app.store.is_empty());

    // Dismissing the notice keeps the input open
    press(&mut app, KeyCode::Esc);
    assert!(app.error_message.is_none());
    assert!(app.creating_task);
}

#[test]
fn test_duplicate_add_shows_notice_and_keeps_list() {
    let mut app = variant_a();
    add_task(&mut app, "Buy milk");
    let before = app.store.tasks().to_vec();

    add_task(&mut app, "Buy milk");

    assert_eq!(
        app.error_message.as_deref(),
        Some(constants::ERROR_DUPLICATE_TASK)
    );
    assert_eq!(app.store.tasks(), &before[..]);
    // The input stays open with the rejected title still in the buffer
    assert!(app.creating_task);
    assert_eq!(app.new_task_title, "Buy milk");
}

#[test]
fn test_duplicate_add_allowed_without_enforcement() {
    let mut app = variant_b();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Buy milk");

    assert!(app.error_message.is_none());
    assert_eq!(app.store.len(), 2);
}

#[test]
fn test_input_escape_cancels_creation() {
    let mut app = variant_a();

    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "half typed");
    press(&mut app, KeyCode::Esc);

    assert!(!app.creating_task);
    assert!(app.new_task_title.is_empty());
    assert!(app.store.is_empty());
}

#[test]
fn test_space_toggles_selected_task() {
    let mut app = variant_a();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char(' '));
    assert!(app.store.tasks()[0].done);

    press(&mut app, KeyCode::Char(' '));
    assert!(!app.store.tasks()[0].done);
}

#[test]
fn test_delete_requires_confirmation() {
    let mut app = variant_a();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('d'));
    assert!(app.delete_confirmation.is_some());
    assert_eq!(app.store.len(), 1);

    press(&mut app, KeyCode::Char('y'));
    assert!(app.delete_confirmation.is_none());
    assert!(app.store.is_empty());
}

#[test]
fn test_declined_confirmation_changes_nothing() {
    let mut app = variant_a();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Walk dog");
    let before = app.store.tasks().to_vec();

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));

    assert!(app.delete_confirmation.is_none());
    assert_eq!(app.store.tasks(), &before[..]);

    // Esc declines as well
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.store.tasks(), &before[..]);
}

#[test]
fn test_delete_without_confirmation() {
    let mut app = variant_b();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('d'));

    assert!(app.delete_confirmation.is_none());
    assert!(app.store.is_empty());
}

#[test]
fn test_remove_clamps_selection() {
    let mut app = variant_b();
    add_task(&mut app, "a");
    add_task(&mut app, "b");
    assert_eq!(app.selected_task_index, 1);

    press(&mut app, KeyCode::Char('d'));

    assert_eq!(app.selected_task_index, 0);
    assert_eq!(app.store.tasks()[0].title, "a");
}

#[test]
fn test_edit_commit_renames() {
    let mut app = variant_a();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Walk dog");

    // Selection is on "Walk dog"; rewrite it
    press(&mut app, KeyCode::Char('e'));
    assert!(app.edit.is_editing());
    for _ in 0.."Walk dog".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_str(&mut app, "Walk the dog");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.edit, EditState::Viewing);
    assert_eq!(app.store.tasks()[1].title, "Walk the dog");
    // The other task is untouched
    assert_eq!(app.store.tasks()[0].title, "Buy milk");
    assert_eq!(app.store.len(), 2);
}

#[test]
fn test_edit_cancel_discards_buffer() {
    let mut app = variant_a();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('e'));
    type_str(&mut app, " and eggs");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.edit, EditState::Viewing);
    assert_eq!(app.store.tasks()[0].title, "Buy milk");
}

#[test]
fn test_edit_commit_rejects_empty_buffer() {
    let mut app = variant_a();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('e'));
    for _ in 0.."Buy milk".len() {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.error_message.as_deref(), Some(constants::ERROR_EMPTY_TITLE));
    assert!(app.edit.is_editing());
    assert_eq!(app.store.tasks()[0].title, "Buy milk");
}

#[test]
fn test_delete_is_disabled_while_editing() {
    let mut app = variant_a();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Char('d'));

    // 'd' went into the buffer, not to the delete action
    assert!(app.delete_confirmation.is_none());
    assert_eq!(app.store.len(), 1);
    match &app.edit {
        EditState::Editing { buffer, .. } => assert_eq!(buffer, "Buy milkd"),
        EditState::Viewing => panic!("expected to still be editing"),
    }
}

#[test]
fn test_toggle_stays_available_while_editing() {
    let mut app = variant_a();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('e'));
    press_ctrl(&mut app, 't');

    assert!(app.edit.is_editing());
    assert!(app.store.tasks()[0].done);

    press_ctrl(&mut app, 't');
    assert!(!app.store.tasks()[0].done);
}

#[test]
fn test_inline_edit_can_be_disabled() {
    let mut app = variant_b();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('e'));

    assert_eq!(app.edit, EditState::Viewing);
}

#[test]
fn test_navigation_wraps() {
    let mut app = variant_a();
    add_task(&mut app, "a");
    add_task(&mut app, "b");
    add_task(&mut app, "c");
    assert_eq!(app.selected_task_index, 2);

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.selected_task_index, 0);

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.selected_task_index, 2);

    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected_task_index, 1);

    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_task_index, 2);
}

#[test]
fn test_help_blocks_other_shortcuts() {
    let mut app = variant_a();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);

    press(&mut app, KeyCode::Char('d'));
    assert!(app.delete_confirmation.is_none());
    assert_eq!(app.store.len(), 1);

    press(&mut app, KeyCode::Esc);
    assert!(!app.show_help);
}

#[test]
fn test_quit_keys() {
    let mut app = variant_a();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    let mut app = variant_a();
    press_ctrl(&mut app, 'c');
    assert!(app.should_quit);
}

#[test]
fn test_worked_example_through_the_ui() {
    let mut app = variant_a();

    add_task(&mut app, "Buy milk");
    assert_eq!(app.store.len(), 1);

    // Duplicate is rejected with a notice
    add_task(&mut app, "Buy milk");
    assert!(app.error_message.is_some());
    assert_eq!(app.store.len(), 1);
    press(&mut app, KeyCode::Enter); // dismiss notice
    press(&mut app, KeyCode::Esc); // close the input again

    add_task(&mut app, "Walk dog");
    assert_eq!(app.store.len(), 2);

    // Selection follows the new task; toggle it
    press(&mut app, KeyCode::Char(' '));
    assert!(app.store.tasks()[1].done);

    // Remove "Buy milk" with the confirmation accepted
    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));

    assert_eq!(app.store.len(), 1);
    let remaining = &app.store.tasks()[0];
    assert_eq!(remaining.title, "Walk dog");
    assert!(remaining.done);
}

//! Event handling and key bindings

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use super::app::App;

/// Handle all user input events
///
/// Exactly one mode handler sees each key press: open dialogs first, then the
/// two text-entry modes, then the help overlay, then normal navigation.
pub fn handle_events(event: Event, app: &mut App) -> Result<bool, anyhow::Error> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Handle notice message dialog
            if app.error_message.is_some() {
                return Ok(handle_message_dialog(key, app));
            }

            // Handle delete confirmation dialog
            if app.delete_confirmation.is_some() {
                return Ok(handle_delete_confirmation(key, app));
            }

            // Handle task creation input
            if app.creating_task {
                return Ok(handle_task_creation_mode(key, app));
            }

            // Handle inline task editing
            if app.edit.is_editing() {
                return Ok(handle_task_editing_mode(key, app));
            }

            // Handle help panel - block all other shortcuts when help is open
            if app.show_help {
                return Ok(handle_help_panel(key, app));
            }

            // Handle normal navigation and actions
            return Ok(handle_normal_mode(key, app));
        }
    }
    Ok(false)
}

/// Handle events when the notice message dialog is shown
fn handle_message_dialog(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.dismiss_message();
            true
        }
        _ => false, // Ignore all other keys while the notice is shown
    }
}

/// Handle events when the delete confirmation dialog is open
fn handle_delete_confirmation(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            app.confirm_delete();
            true
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            app.cancel_delete();
            true
        }
        _ => false, // Ignore other keys during confirmation
    }
}

/// Handle events in task creation mode
fn handle_task_creation_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            app.add_char_to_new_title(c);
            true
        }
        KeyCode::Backspace => {
            app.remove_char_from_new_title();
            true
        }
        KeyCode::Enter => {
            app.create_task();
            true
        }
        KeyCode::Esc => {
            app.cancel_create_task();
            true
        }
        _ => false, // Ignore all other keys when creating a task
    }
}

/// Handle events in task editing mode
///
/// There is no delete binding here: 'd' is buffer text while editing. Ctrl+T
/// toggles the done flag without leaving the edit.
fn handle_task_editing_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    if key.code == KeyCode::Char('t') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.toggle_editing_task();
        return true;
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            app.add_char_to_edit_buffer(c);
            true
        }
        KeyCode::Backspace => {
            app.remove_char_from_edit_buffer();
            true
        }
        KeyCode::Enter => {
            app.save_edit_task();
            true
        }
        KeyCode::Esc => {
            app.cancel_edit_task();
            true
        }
        _ => false, // Ignore all other keys when editing a task
    }
}

/// Handle events when the help panel is open
fn handle_help_panel(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('?' | 'q') | KeyCode::Esc => {
            app.show_help = false;
            true
        }
        _ => false, // Ignore all other keys when help is open
    }
}

/// Handle events in normal mode
fn handle_normal_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    // Check for Ctrl+C first
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return true;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_task();
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_task();
            true
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected_task();
            true
        }
        KeyCode::Char('a') => {
            app.start_create_task();
            true
        }
        KeyCode::Char('e') => {
            app.start_edit_task();
            true
        }
        KeyCode::Char('d') => {
            app.request_delete_selected();
            true
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            true
        }
        _ => false,
    }
}

//! Constants used throughout the application
//!
//! This module centralizes user-facing strings and layout values to keep
//! wording consistent between the UI, the status bar, and the tests.

// Notice Messages
pub const ERROR_DUPLICATE_TASK: &str = "You can't add a task with a title that already exists";
pub const ERROR_EMPTY_TITLE: &str = "Task title cannot be empty";

// Dialog Titles
pub const TITLE_DUPLICATE_TASK: &str = "Task already exists";
pub const TITLE_CONFIRM_DELETE: &str = "Confirm Delete";

// Input Placeholders
pub const INPUT_PLACEHOLDER: &str = "Press 'a' to add a task";
pub const INPUT_TITLE: &str = " New Task ";

// Empty State
pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Press 'a' to create one.";

// Status Bar Hints
pub const HINT_NORMAL: &str = "Space: toggle • a: add • e: edit • d: delete • ?: help • q: quit";
pub const HINT_NORMAL_NO_EDIT: &str = "Space: toggle • a: add • d: delete • ?: help • q: quit";
pub const HINT_CREATING: &str = "Enter: add task • Esc: cancel";
pub const HINT_EDITING: &str = "Enter: save • Esc: discard • Ctrl+T: toggle done";
pub const HINT_CONFIRMING: &str = "y: delete • n/Esc: keep";

// UI Layout Constants
/// Height of the bordered header block in rows
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the bordered task input block in rows
pub const INPUT_HEIGHT: u16 = 3;
/// Height of the status bar in rows
pub const STATUS_HEIGHT: u16 = 1;
/// Longest task title preview shown in the delete confirmation dialog
pub const DELETE_PREVIEW_MAX_CHARS: usize = 40;

//! Application state and business logic

use ratatui::widgets::ListState;

use crate::config::{BehaviorConfig, Config};
use crate::constants;
use crate::icons::IconService;
use crate::tasks::{AddError, Task, TaskId, TaskStore};

/// Inline edit state of the task list.
///
/// While a task is being edited, the row renders `buffer` instead of the
/// stored title, and the delete action is unreachable. Canceling drops the
/// buffer, so the row falls back to the stored title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { task_id: TaskId, buffer: String },
}

impl EditState {
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// The edit buffer for the given task, if it is the one being edited.
    #[must_use]
    pub fn buffer_for(&self, id: TaskId) -> Option<&str> {
        match self {
            Self::Editing { task_id, buffer } if *task_id == id => Some(buffer),
            _ => None,
        }
    }
}

/// Application state
pub struct App {
    pub should_quit: bool,
    pub store: TaskStore,
    pub behavior: BehaviorConfig,
    pub selected_task_index: usize,
    pub task_list_state: ListState,
    // Task creation
    pub creating_task: bool,
    pub new_task_title: String,
    // Inline edit
    pub edit: EditState,
    // Pending removal, holding the task id until the user confirms
    pub delete_confirmation: Option<TaskId>,
    pub error_message: Option<String>,
    pub show_help: bool,
    pub icons: IconService,
}

impl App {
    /// Create a new App instance from the loaded configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut task_list_state = ListState::default();
        task_list_state.select(Some(0));

        Self {
            should_quit: false,
            store: TaskStore::new(config.behavior.enforce_unique_titles),
            behavior: config.behavior.clone(),
            selected_task_index: 0,
            task_list_state,
            creating_task: false,
            new_task_title: String::new(),
            edit: EditState::Viewing,
            delete_confirmation: None,
            error_message: None,
            show_help: false,
            icons: IconService::new(config.ui.icon_theme),
        }
    }

    /// Get the currently selected task, if any
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.selected_task_index)
    }

    pub fn next_task(&mut self) {
        if !self.store.is_empty() {
            self.selected_task_index = (self.selected_task_index + 1) % self.store.len();
            self.task_list_state.select(Some(self.selected_task_index));
        }
    }

    pub fn previous_task(&mut self) {
        if !self.store.is_empty() {
            self.selected_task_index = if self.selected_task_index == 0 {
                self.store.len() - 1
            } else {
                self.selected_task_index - 1
            };
            self.task_list_state.select(Some(self.selected_task_index));
        }
    }

    /// Start creating a new task
    pub fn start_create_task(&mut self) {
        self.creating_task = true;
        self.new_task_title.clear();
    }

    /// Cancel task creation
    pub fn cancel_create_task(&mut self) {
        self.creating_task = false;
        self.new_task_title.clear();
    }

    /// Add a character to the new task title
    pub fn add_char_to_new_title(&mut self, c: char) {
        if self.creating_task {
            self.new_task_title.push(c);
        }
    }

    /// Remove the last character from the new task title
    pub fn remove_char_from_new_title(&mut self) {
        if self.creating_task {
            self.new_task_title.pop();
        }
    }

    /// Create the new task from the input buffer
    ///
    /// Empty titles and rejected duplicates surface a notice and keep the
    /// input open with its buffer intact.
    pub fn create_task(&mut self) {
        let title = self.new_task_title.trim().to_string();
        if title.is_empty() {
            self.error_message = Some(constants::ERROR_EMPTY_TITLE.to_string());
            return;
        }

        match self.store.add(&title) {
            Ok(id) => {
                log::info!("task {id} created: '{title}'");
                self.creating_task = false;
                self.new_task_title.clear();
                self.selected_task_index = self.store.len() - 1;
                self.task_list_state.select(Some(self.selected_task_index));
            }
            Err(AddError::DuplicateTitle) => {
                log::info!("rejected duplicate task title '{title}'");
                self.error_message = Some(constants::ERROR_DUPLICATE_TASK.to_string());
            }
        }
    }

    /// Toggle the done flag of the currently selected task
    pub fn toggle_selected_task(&mut self) {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            self.store.toggle_done(id);
            log::debug!("task {id} toggled");
        }
    }

    /// Toggle the done flag of the task being edited, without leaving the edit
    pub fn toggle_editing_task(&mut self) {
        if let EditState::Editing { task_id, .. } = self.edit {
            self.store.toggle_done(task_id);
            log::debug!("task {task_id} toggled while editing");
        }
    }

    /// Start editing the currently selected task
    pub fn start_edit_task(&mut self) {
        if !self.behavior.allow_inline_edit || self.edit.is_editing() {
            return;
        }
        if let Some(task) = self.selected_task() {
            self.edit = EditState::Editing {
                task_id: task.id,
                buffer: task.title.clone(),
            };
        }
    }

    /// Cancel the edit, dropping the buffer
    pub fn cancel_edit_task(&mut self) {
        self.edit = EditState::Viewing;
    }

    /// Commit the edit buffer as the task's new title
    ///
    /// An empty buffer surfaces a notice and stays in editing.
    pub fn save_edit_task(&mut self) {
        if let EditState::Editing { task_id, buffer } = &self.edit {
            let new_title = buffer.trim().to_string();
            if new_title.is_empty() {
                self.error_message = Some(constants::ERROR_EMPTY_TITLE.to_string());
                return;
            }
            let id = *task_id;
            self.store.rename(id, &new_title);
            log::info!("task {id} renamed to '{new_title}'");
            self.edit = EditState::Viewing;
        }
    }

    /// Add a character to the edit buffer
    pub fn add_char_to_edit_buffer(&mut self, c: char) {
        if let EditState::Editing { buffer, .. } = &mut self.edit {
            buffer.push(c);
        }
    }

    /// Remove the last character from the edit buffer
    pub fn remove_char_from_edit_buffer(&mut self) {
        if let EditState::Editing { buffer, .. } = &mut self.edit {
            buffer.pop();
        }
    }

    /// Request removal of the currently selected task
    ///
    /// With confirmation enabled this only arms the dialog; the removal
    /// happens in [`App::confirm_delete`].
    pub fn request_delete_selected(&mut self) {
        if self.edit.is_editing() {
            return;
        }
        if let Some(task) = self.selected_task() {
            let id = task.id;
            if self.behavior.confirm_before_remove {
                self.delete_confirmation = Some(id);
            } else {
                self.remove_task(id);
            }
        }
    }

    /// Perform the pending removal
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.delete_confirmation.take() {
            self.remove_task(id);
        }
    }

    /// Drop the pending removal without touching the list
    pub fn cancel_delete(&mut self) {
        self.delete_confirmation = None;
    }

    /// Dismiss the transient notice message
    pub fn dismiss_message(&mut self) {
        self.error_message = None;
    }

    fn remove_task(&mut self, id: TaskId) {
        self.store.remove(id);
        log::info!("task {id} removed");

        // Keep the selection inside the shrunk list
        if self.selected_task_index >= self.store.len() && !self.store.is_empty() {
            self.selected_task_index = self.store.len() - 1;
        }
        self.task_list_state.select(Some(self.selected_task_index));
    }
}

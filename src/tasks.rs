//! Task entities and the in-memory task store.
//!
//! The store is the single owner of the task sequence. It hands the list out
//! as a shared slice only, so every mutation goes through one of the
//! operations below and the UI can never alias into it.

use thiserror::Error;

/// Identifier of a task, unique for the lifetime of a store.
pub type TaskId = u64;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

/// Errors surfaced by [`TaskStore::add`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddError {
    #[error("a task with this title already exists")]
    DuplicateTitle,
}

/// Ordered, insertion-ordered collection of tasks.
///
/// Ids come from a monotonic counter starting at 1 and are never reused
/// within a session, so they stay unique under arbitrarily fast creation.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
    enforce_unique_titles: bool,
}

impl TaskStore {
    #[must_use]
    pub fn new(enforce_unique_titles: bool) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            enforce_unique_titles,
        }
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Whether a task with exactly this title exists (case-sensitive).
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title == title)
    }

    /// Append a new pending task with the given title.
    ///
    /// When duplicate enforcement is on, an exact title match rejects the add
    /// and leaves the list untouched.
    pub fn add(&mut self, title: &str) -> Result<TaskId, AddError> {
        if self.enforce_unique_titles && self.contains_title(title) {
            return Err(AddError::DuplicateTitle);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            done: false,
        });
        Ok(id)
    }

    /// Flip the done flag of the task with the given id.
    ///
    /// Unknown ids are ignored.
    pub fn toggle_done(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.done = !task.done;
        }
    }

    /// Replace the title of the task with the given id.
    ///
    /// No uniqueness re-check happens on rename. Unknown ids are ignored.
    pub fn rename(&mut self, id: TaskId, new_title: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.title = new_title.to_string();
        }
    }

    /// Remove the task with the given id, keeping the relative order of the
    /// remaining tasks.
    ///
    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
    }
}

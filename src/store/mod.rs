//! Global Application State Store
//!
//! Holds the todo collection, the form draft and the editing target, and
//! implements every list mutation. Uses Leptos reactive_stores so the view
//! can subscribe to individual fields.


use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{TodoError, TodoResult};
use crate::models::{Draft, DraftField, Todo, TodoId, TodoStatus};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todo items, in creation order
    pub todos: Vec<Todo>,
    /// Form working copy
    pub draft: Draft,
    /// Item being edited (None = creating)
    pub editing: Option<TodoId>,
}

/// Outcome of a form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(TodoId),
    /// Whether an item matched the editing target
    Updated(bool),
}

/// Item counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoSummary {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_edit_target(&self, id: TodoId) -> bool {
        self.editing == Some(id)
    }

    /// Submit is enabled only with a title
    pub fn can_submit(&self) -> bool {
        self.draft.has_title()
    }

    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    fn contains(&self, id: TodoId) -> bool {
        self.todo(id).is_some()
    }

    /// Apply a form field change to the draft
    pub fn update_draft(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.draft.title = value,
            DraftField::Description => self.draft.description = value,
            DraftField::DueDate => self.draft.due_date = value,
            DraftField::Status => self.draft.status = TodoStatus::from_str(&value),
        }
    }

    /// Form submission: create or commit depending on editing mode
    pub fn submit(&mut self) -> TodoResult<SubmitOutcome> {
        if !self.can_submit() {
            return Err(TodoError::EmptyTitle);
        }
        if self.is_editing() {
            Ok(SubmitOutcome::Updated(self.commit_edit()))
        } else {
            self.create().map(SubmitOutcome::Created)
        }
    }

    /// Append a new item built from the draft, then clear the draft
    pub fn create(&mut self) -> TodoResult<TodoId> {
        if self.is_editing() {
            return Err(TodoError::EditInProgress);
        }
        if !self.draft.has_title() {
            return Err(TodoError::EmptyTitle);
        }

        let mut id = TodoId::new();
        while self.contains(id) {
            id = TodoId::new();
        }

        let draft = std::mem::take(&mut self.draft);
        self.todos.push(Todo {
            status: TodoStatus::default(),
            ..Todo::from_draft(id, &draft)
        });
        log::debug!("[STORE] Created todo {} ({} total)", id, self.todos.len());
        Ok(id)
    }

    /// Remove an item by ID. Locked while editing.
    pub fn delete(&mut self, id: TodoId) -> Option<Todo> {
        if self.is_editing() {
            return None;
        }
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        log::debug!("[STORE] Deleted todo {}", id);
        Some(self.todos.remove(index))
    }

    /// Load an item into the draft and enter editing mode
    pub fn begin_edit(&mut self, id: TodoId) -> bool {
        if self.is_editing() {
            return false;
        }
        let Some(todo) = self.todo(id) else {
            return false;
        };
        self.draft = Draft::from(todo);
        self.editing = Some(id);
        log::debug!("[STORE] Editing todo {}", id);
        true
    }

    /// Write the draft back over the edited item and leave editing mode.
    ///
    /// Returns whether an item was replaced. Editing mode and the draft are
    /// reset either way.
    pub fn commit_edit(&mut self) -> bool {
        let Some(id) = self.editing.take() else {
            return false;
        };
        let draft = std::mem::take(&mut self.draft);

        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                *todo = Todo::from_draft(id, &draft);
                log::debug!("[STORE] Updated todo {}", id);
                true
            }
            None => {
                log::warn!("[STORE] Edit target {} no longer exists", id);
                false
            }
        }
    }

    /// Leave editing mode without touching the collection
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            log::debug!("[STORE] Cancelled edit of {}", id);
        }
        self.draft = Draft::default();
    }

    /// Change only the status of an item. Locked while editing.
    pub fn set_status(&mut self, id: TodoId, status: TodoStatus) -> bool {
        if self.is_editing() {
            return false;
        }
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.status = status;
                log::debug!("[STORE] Todo {} is now {}", id, status.as_str());
                true
            }
            None => false,
        }
    }

    pub fn summary(&self) -> TodoSummary {
        self.todos.iter().fold(
            TodoSummary {
                total: self.todos.len(),
                ..Default::default()
            },
            |mut summary, todo| {
                match todo.status {
                    TodoStatus::NotStarted => summary.not_started += 1,
                    TodoStatus::InProgress => summary.in_progress += 1,
                    TodoStatus::Done => summary.done += 1,
                }
                summary
            },
        )
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Submit the form draft
pub fn store_submit(store: &AppStore) -> TodoResult<SubmitOutcome> {
    store.write().submit()
}

/// Set one draft field from a form input
pub fn store_update_draft(store: &AppStore, field: DraftField, value: String) {
    store.write().update_draft(field, value);
}

/// Remove a todo from the store by ID
pub fn store_delete_todo(store: &AppStore, id: TodoId) {
    store.write().delete(id);
}

/// Start editing a todo
pub fn store_begin_edit(store: &AppStore, id: TodoId) {
    store.write().begin_edit(id);
}

/// Abandon the current edit
pub fn store_cancel_edit(store: &AppStore) {
    store.write().cancel_edit();
}

/// Update a todo's status by ID
pub fn store_set_status(store: &AppStore, id: TodoId, status: TodoStatus) {
    store.write().set_status(id, status);
}

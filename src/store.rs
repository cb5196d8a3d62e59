//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store per
//! mounted `TodoListView`, shared with its children via context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoId};
use crate::todo_list::TodoList;

/// Entire state of one to-do list view
#[derive(Clone, Debug, Default, Store)]
pub struct TodoListState {
    /// The todos themselves
    pub list: TodoList,
    /// Text in the input field that has not been submitted yet
    pub pending_text: String,
}

/// Type alias for the store
pub type TodoStore = Store<TodoListState>;

/// Create an empty store, as on mount
pub fn new_todo_store() -> TodoStore {
    Store::new(TodoListState::default())
}

/// Make the store available to child components
pub fn provide_todo_store(store: TodoStore) {
    provide_context(store);
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add the pending text as a new todo and clear the input.
///
/// Empty pending text is ignored; the input's `required` attribute normally
/// stops that submission before it gets here.
pub fn store_add_todo(store: &TodoStore) {
    let text = store.pending_text().read_untracked().clone();
    if text.is_empty() {
        tracing::warn!("ignoring submit with empty todo text");
        return;
    }

    let field = store.list();
    let (id, count) = {
        let mut list = field.write();
        let id = list.add(text);
        (id, list.items().len())
    };
    store.pending_text().write().clear();
    tracing::debug!(%id, count, "todo added");
}

/// Remove a todo by ID. Unknown IDs are ignored.
pub fn store_delete_todo(store: &TodoStore, id: TodoId) {
    if store.list().write().delete(id) {
        tracing::debug!(%id, "todo deleted");
    } else {
        tracing::debug!(%id, "delete of unknown todo ignored");
    }
}

/// Flip the completed flag of a todo by ID. Unknown IDs are ignored.
pub fn store_toggle_completed(store: &TodoStore, id: TodoId) {
    let field = store.list();
    let mut list = field.write();
    if list.toggle_completed(id) {
        let completed = list.get(id).map(|todo| todo.completed);
        tracing::debug!(%id, ?completed, "todo toggled");
    } else {
        tracing::debug!(%id, "toggle of unknown todo ignored");
    }
}

/// Replace the pending input text verbatim
pub fn store_update_pending_text(store: &TodoStore, text: String) {
    *store.pending_text().write() = text;
}

/// Current todos in display order (tracked)
pub fn store_todos(store: &TodoStore) -> Vec<Todo> {
    store.list().read().items().to_vec()
}

/// Current pending input text (tracked)
pub fn store_pending_text(store: &TodoStore) -> String {
    store.pending_text().read().clone()
}

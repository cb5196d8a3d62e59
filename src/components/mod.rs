//! UI Components
//!
//! Leptos components making up the to-do list view.

mod todo_list_view;
mod todo_row;
mod new_todo_form;

pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
pub use new_todo_form::NewTodoForm;

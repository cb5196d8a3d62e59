//! Todo List View Component
//!
//! Titled list of todos with the add form underneath. Owns the store for
//! its lifetime; children reach it through context.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoRow};
use crate::config::placeholder_for;
use crate::store::{new_todo_store, provide_todo_store, store_todos};

/// To-do list view
///
/// # Arguments
/// * `heading` - Title of the list; lower-cased into the input placeholder
#[component]
pub fn TodoListView(#[prop(into)] heading: String) -> impl IntoView {
    let store = new_todo_store();
    provide_todo_store(store);
    tracing::info!(%heading, "todo list mounted");

    let placeholder = placeholder_for(&heading);

    view! {
        <div class="toDoContainer">
            <div class="noteTitle">
                <h1>{heading}</h1>
            </div>

            <div class="listItems">
                <For
                    each=move || store_todos(&store)
                    // completed is part of the key so a toggle re-renders the row
                    key=|todo| (todo.id, todo.completed)
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
                <NewTodoForm placeholder=placeholder />
            </div>
        </div>
    }
}

//! Todo Row Component
//!
//! One rendered todo: delete button plus a toggle button showing the text.

use leptos::prelude::*;

use crate::models::Todo;
use crate::store::{store_delete_todo, store_toggle_completed, use_todo_store};

/// CSS class for the text of a row
pub fn text_class(completed: bool) -> &'static str {
    if completed { "toDoCompleted" } else { "" }
}

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_todo_store();
    let id = todo.id;
    let class = text_class(todo.completed);

    view! {
        <li>
            <button
                class="deleteButton"
                on:click=move |_| store_delete_todo(&store, id)
            >
                "x"
            </button>
            <button
                class="item"
                on:click=move |_| store_toggle_completed(&store, id)
            >
                <span class=class>{todo.text}</span>
            </button>
        </li>
    }
}

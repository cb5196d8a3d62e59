//! New Todo Form Component
//!
//! Text field bound to the pending text, submitted to add a todo.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{
    store_add_todo, store_pending_text, store_update_pending_text, use_todo_store,
};

/// Form for adding todos
#[component]
pub fn NewTodoForm(#[prop(into)] placeholder: String) -> impl IntoView {
    let store = use_todo_store();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_todo(&store);
    };

    view! {
        <form on:submit=add_todo>
            <input
                class="inputBar"
                type="text"
                name="todoText"
                placeholder=placeholder
                prop:value=move || store_pending_text(&store)
                on:input=move |ev| {
                    let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    else {
                        return;
                    };
                    store_update_pending_text(&store, input.value());
                }
                required=true
            />
            <button type="submit" class="addButton">"Add"</button>
        </form>
    }
}

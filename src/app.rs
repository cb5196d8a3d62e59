//! Todo List App
//!
//! Root component: a single to-do list view.

use leptos::prelude::*;

use crate::components::TodoListView;

#[component]
pub fn App(#[prop(into)] heading: String) -> impl IntoView {
    view! { <TodoListView heading=heading /> }
}

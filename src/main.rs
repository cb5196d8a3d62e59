//! Todo List Frontend Entry Point

mod app;
mod components;
mod config;
mod models;
mod store;
mod todo_list;

use app::App;
use config::ViewConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ViewConfig::from_document();
    console_logger::init(config.log_level);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let heading = config.heading;
    mount_to_body(move || view! { <App heading=heading.clone() /> });
}

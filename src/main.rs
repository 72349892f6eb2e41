//! Web Widgets Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dom;
mod form_validator;
mod logging;
mod models;
mod storage;
mod task_store;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::default();
    logging::init(config.log_level);
    tracing::info!(storage_key = %config.storage_key, "mounting widgets");

    mount_to_body(move || view! { <App config=config.clone() /> });
}

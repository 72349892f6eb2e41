//! To-Do Widget
//!
//! Opens browser storage and mounts the task list. Without storage the widget
//! is skipped and the rest of the page keeps working.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskListView};
use crate::config::use_config;
use crate::context::TaskListContext;
use crate::storage::{BrowserStorage, KeyValueStore};
use crate::task_store::TaskStore;

#[component]
pub fn TodoWidget() -> impl IntoView {
    let config = use_config();

    let slot: Box<dyn KeyValueStore> = match BrowserStorage::local() {
        Ok(slot) => Box::new(slot),
        Err(err) => {
            tracing::error!(error = %err, "to-do widget disabled");
            return ().into_any();
        }
    };
    let ctx = TaskListContext::new(TaskStore::new(slot, config.storage_key));
    provide_context(ctx);

    let clear_all = move |_| {
        let confirmed = web_sys::window()
            .and_then(|window| window.confirm_with_message("Clear all tasks?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        tracing::info!("clearing all tasks");
        ctx.clear();
    };

    view! {
        <section class="todo-widget">
            <h2>"To-Do List"</h2>
            <NewTaskForm />
            <TaskListView />
            <button id="clearAllBtn" type="button" class="clear-all-btn" on:click=clear_all>
                "Clear All"
            </button>
        </section>
    }
    .into_any()
}

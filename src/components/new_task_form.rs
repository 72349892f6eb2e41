//! New Task Form Component
//!
//! Text input with an Add button and Enter shortcut.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::config::use_config;
use crate::context::TaskListContext;
use crate::dom::warn_on_err;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<TaskListContext>().expect("TaskListContext should be provided");
    let flash_ms = use_config().invalid_flash_ms;

    let (new_text, set_new_text) = signal(String::new());
    let (flagged, set_flagged) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let focus_input = move || {
        if let Some(input) = input_ref.get() {
            warn_on_err("focus task input", input.focus());
        }
    };

    let add_task = move || {
        if ctx.add(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        } else {
            set_flagged.set(true);
            Timeout::new(flash_ms, move || set_flagged.set(false)).forget();
        }
        focus_input();
    };

    view! {
        <div class="task-input-row">
            <input
                id="taskInput"
                type="text"
                placeholder="Add a new task..."
                aria-label="New task"
                node_ref=input_ref
                class:invalid=flagged
                prop:value=new_text
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        add_task();
                    }
                }
            />
            <button id="addTaskBtn" type="button" on:click=move |_| add_task()>"Add"</button>
        </div>
    }
}

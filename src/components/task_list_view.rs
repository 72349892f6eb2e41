//! Task List View Component
//!
//! Renders the stored tasks and dispatches row gestures by positional index.
//! Handlers are attached once on the list container, so rows can be rebuilt freely.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::TaskRow;
use crate::context::TaskListContext;

const ROW_SELECTOR: &str = "li.task-item";
const DELETE_SELECTOR: &str = ".delete-btn";
const CHECKBOX_SELECTOR: &str = ".task-checkbox";

/// Parse a row's `data-index` token back into a list position
pub fn parse_row_index(token: &str) -> Option<usize> {
    token.trim().parse().ok()
}

/// Event target as an element, plus the index of the row containing it
fn row_target(ev: &web_sys::Event) -> Option<(web_sys::Element, usize)> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let row = target.closest(ROW_SELECTOR).ok().flatten()?;
    let index = parse_row_index(&row.get_attribute("data-index")?)?;
    Some((target, index))
}

fn within(target: &web_sys::Element, selector: &str) -> bool {
    matches!(target.closest(selector), Ok(Some(_)))
}

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_context::<TaskListContext>().expect("TaskListContext should be provided");

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some((target, index)) = row_target(&ev) else { return };
        if within(&target, DELETE_SELECTOR) {
            tracing::debug!(index, "delete task");
            ctx.delete(index);
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some((target, index)) = row_target(&ev) else { return };
        if within(&target, CHECKBOX_SELECTOR) {
            tracing::debug!(index, "toggle task");
            ctx.toggle(index);
        }
    };

    view! {
        <ul id="taskList" class="task-list" on:click=on_click on:change=on_change>
            {move || {
                let tasks = ctx.tasks();
                if tasks.is_empty() {
                    view! {
                        <li class="task-empty">"No tasks yet. Add your first task above."</li>
                    }.into_any()
                } else {
                    tasks
                        .into_iter()
                        .enumerate()
                        .map(|(index, task)| view! { <TaskRow index=index task=task /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </ul>
    }
}

//! Task Row Component
//!
//! One rendered task, tagged with its positional index.

use leptos::prelude::*;

use crate::models::Task;

/// A single task row. Clicks and changes are handled by the enclosing list.
#[component]
pub fn TaskRow(index: usize, task: Task) -> impl IntoView {
    let completed = task.completed;
    let toggle_label = format!("Mark task as completed: {}", task.text);
    let delete_label = format!("Delete task: {}", task.text);

    view! {
        <li class="task-item" data-index=index.to_string()>
            <div class="task-left">
                <input
                    type="checkbox"
                    class="task-checkbox"
                    prop:checked=completed
                    aria-label=toggle_label
                />
                <span class=if completed { "task-text completed" } else { "task-text" }>
                    {task.text}
                </span>
            </div>
            <button type="button" class="delete-btn" aria-label=delete_label>"×"</button>
        </li>
    }
}

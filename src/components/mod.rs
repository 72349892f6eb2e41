//! UI Components
//!
//! Leptos components for the contact form and the to-do widget.

mod contact_form;
mod new_task_form;
mod task_list_view;
mod task_row;
mod toast;
mod todo_widget;

pub use contact_form::ContactFormView;
pub use new_task_form::NewTaskForm;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
pub use toast::Toast;
pub use todo_widget::TodoWidget;

//! Web Widgets App
//!
//! Page layout hosting the contact form, the to-do list and the shared toast.

use leptos::prelude::*;

use crate::components::{ContactFormView, Toast, TodoWidget};
use crate::config::Config;
use crate::context::ToastContext;

#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_context(ToastContext::new(config.toast_duration_ms));
    provide_context(config);

    view! {
        <main class="page">
            <section class="contact-widget">
                <h2>"Contact"</h2>
                <ContactFormView />
            </section>

            <TodoWidget />

            <Toast />
        </main>
    }
}

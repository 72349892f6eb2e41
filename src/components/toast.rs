//! Toast Component
//!
//! Transient notification driven by `ToastContext`.

use leptos::prelude::*;

use crate::context::ToastContext;

#[component]
pub fn Toast() -> impl IntoView {
    let toast = use_context::<ToastContext>().expect("ToastContext should be provided");

    view! {
        <div
            id="toast"
            class=move || if toast.visible() { "toast show" } else { "toast" }
            role="status"
            aria-live="polite"
        >
            {move || toast.message()}
        </div>
    }
}

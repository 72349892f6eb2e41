//! Contact Form Component
//!
//! Three-field form validated on submit, with inline errors and a success toast.

use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::ToastContext;
use crate::dom::warn_on_err;
use crate::form_validator::{ContactForm, ContactFormStoreFields, Field, SubmitOutcome, SENT_MESSAGE};

#[component]
pub fn ContactFormView() -> impl IntoView {
    let toast = use_context::<ToastContext>().expect("ToastContext should be provided");
    let state = Store::new(ContactForm::default());

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let focus = move |field: Field| {
        let focused = match field {
            Field::Name => name_ref.get().map(|el| el.focus()),
            Field::Email => email_ref.get().map(|el| el.focus()),
            Field::Message => message_ref.get().map(|el| el.focus()),
        };
        if let Some(result) = focused {
            warn_on_err("focus contact field", result);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let outcome = state.write().submit();
        match outcome {
            SubmitOutcome::Rejected(err) => {
                tracing::debug!(field = ?err.field(), "contact form rejected");
                focus(err.field());
            }
            SubmitOutcome::Sent => {
                tracing::info!("contact form sent");
                toast.show(SENT_MESSAGE);
            }
        }
    };

    let on_reset = move |_| {
        state.write().reset();
        focus(Field::Name);
    };

    // Grow the textarea to fit its content
    let auto_grow = move || {
        let Some(el) = message_ref.get() else { return };
        let style = web_sys::HtmlElement::style(&el);
        warn_on_err("reset textarea height", style.set_property("height", "auto"));
        warn_on_err(
            "grow textarea",
            style.set_property("height", &format!("{}px", el.scroll_height())),
        );
    };

    let invalid = move |field: Field| move || state.invalid().get() == Some(field);

    view! {
        <form id="contactForm" class="contact-form" on:submit=on_submit>
            <label for="name">"Name"</label>
            <input
                id="name"
                type="text"
                node_ref=name_ref
                class:invalid=invalid(Field::Name)
                prop:value=move || state.name().get()
                on:input=move |ev| state.name().set(event_target_value(&ev))
            />

            <label for="email">"Email"</label>
            <input
                id="email"
                type="text"
                inputmode="email"
                node_ref=email_ref
                class:invalid=invalid(Field::Email)
                prop:value=move || state.email().get()
                on:input=move |ev| state.email().set(event_target_value(&ev))
            />

            <label for="message">"Message"</label>
            <textarea
                id="message"
                rows="3"
                node_ref=message_ref
                class:invalid=invalid(Field::Message)
                prop:value=move || state.message().get()
                on:input=move |ev| {
                    state.message().set(event_target_value(&ev));
                    auto_grow();
                }
            />

            <p
                id="formMsg"
                class=move || if state.notice().get().is_some() { "form-msg error" } else { "form-msg" }
                aria-live="polite"
            >
                {move || state.notice().get().unwrap_or_default()}
            </p>

            <div class="form-actions">
                <button type="submit">"Send"</button>
                <button id="resetBtn" type="button" on:click=on_reset>"Reset"</button>
            </div>
        </form>
    }
}

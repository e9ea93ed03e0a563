//! Contact form with inline per-field errors and a live character counter.
//!
//! Submission never leaves the page: the submit event is always cancelled and
//! a passing form only opens the confirmation modal.

use leptos::prelude::*;

use crate::state::contact::{ContactState, submit_contact};
use crate::state::modal::ModalState;

#[component]
pub fn ContactForm() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();
    let modal = expect_context::<RwSignal<ModalState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let valid = contact
            .try_update(|c| modal.try_update(|m| submit_contact(c, m)))
            .flatten()
            .unwrap_or(false);
        if valid {
            leptos::logging::log!("valid");
        }
    };

    view! {
        <form id="formSection" class="contact-form" on:submit=on_submit>
            <label for="contactEmail">"Email"</label>
            <input
                id="contactEmail"
                type="text"
                placeholder="you@example.com"
                prop:value=move || contact.with(|c| c.email.clone())
                on:input=move |ev| contact.update(|c| c.set_email(event_target_value(&ev)))
            />
            <span id="emailError" class="error">
                {move || contact.with(|c| c.email_error.map(|e| e.to_string()))}
            </span>

            <label for="contactMessage">"Message"</label>
            <textarea
                id="contactMessage"
                prop:value=move || contact.with(|c| c.message.clone())
                on:input=move |ev| contact.update(|c| c.set_message(event_target_value(&ev)))
            ></textarea>
            <span id="charactersLeft" style:color=move || contact.with(|c| c.counter.color())>
                {move || contact.with(|c| c.counter.text())}
            </span>
            <span id="messageError" class="error">
                {move || contact.with(|c| c.message_error.map(|e| e.to_string()))}
            </span>

            <button type="submit">"Submit"</button>
        </form>
    }
}

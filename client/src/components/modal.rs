//! Shared overlay dialog.
//!
//! Dismissed by the close control or by a click that lands on the backdrop.
//! Clicks inside the content box stop at the box and never reach the backdrop.

use leptos::prelude::*;

use crate::state::modal::{ModalClick, ModalState};

#[component]
pub fn Modal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let on_click = move |target: ModalClick| modal.update(|m| m.dismiss_on_click(target));

    view! {
        <div
            id="modal"
            class="modal"
            style:display=move || if modal.with(ModalState::is_visible) { "block" } else { "none" }
            on:click=move |_| on_click(ModalClick::Backdrop)
        >
            <div
                class="modal-content"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    on_click(ModalClick::Content);
                }
            >
                <button
                    id="closeModal"
                    class="close"
                    type="button"
                    aria-label="Close"
                    on:click=move |_| on_click(ModalClick::CloseControl)
                >
                    "×"
                </button>
                <p id="modalMessage">{move || modal.with(|m| m.message.clone().unwrap_or_default())}</p>
            </div>
        </div>
    }
}

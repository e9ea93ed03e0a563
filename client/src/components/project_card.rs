//! Compact clickable card for one project in the gallery list.

use leptos::prelude::*;

use crate::state::gallery::{CardView, GalleryState};

/// A project card. Clicking it asks the gallery to spotlight `card.id`.
#[component]
pub fn ProjectCard(card: CardView, on_select: Callback<String>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let style = card.background_image.map(|value| format!("background-image: {value};"));
    let active_id = card.id.clone();
    let select_id = card.id.clone();

    view! {
        <div
            class="projectCard"
            class:projectCard--active=move || gallery.with(|g| g.is_spotlighted(&active_id))
            id=card.id
            style=style
            on:click=move |_| on_select.run(select_id.clone())
        >
            <h4>{card.name}</h4>
            <p>{card.short_description}</p>
        </div>
    }
}

//! Large detail panel for the currently spotlighted project.

use leptos::prelude::*;

use crate::state::gallery::{GalleryState, SPOTLIGHT_LINK_TEXT, SpotlightView};

/// Re-renders wholesale whenever the spotlight changes.
#[component]
pub fn ProjectSpotlight() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let spotlight = Memo::new(move |_| gallery.with(|g| g.spotlight().map(SpotlightView::from)));

    view! {
        <div id="projectSpotlight" class="projectSpotlight">
            {move || {
                spotlight
                    .get()
                    .map(|spot| {
                        view! {
                            <h3 id="spotlightTitles">{spot.title}</h3>
                            {spot
                                .image_src
                                .map(|src| {
                                    view! {
                                        <div class="spotlightImage">
                                            <img src=src alt=""/>
                                        </div>
                                    }
                                })}
                            <p>{spot.body}</p>
                            <a href=spot.url>{SPOTLIGHT_LINK_TEXT}</a>
                        }
                    })
            }}
        </div>
    }
}

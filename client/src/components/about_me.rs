//! "About me" section: biography paragraph plus headshot.

use leptos::prelude::*;

use crate::state::gallery::GalleryState;
use crate::state::profile::{AboutContent, ProfileState, about_content};

/// Renders the biography once loaded, or whichever load error text applies.
#[component]
pub fn AboutMe() -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileState>>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let content = Memo::new(move |_| profile.with(|p| gallery.with(|g| about_content(p, g))));

    view! {
        <section id="aboutMe" class="about-me">
            {move || match content.get() {
                AboutContent::Pending => ().into_any(),
                AboutContent::Error(text) => text.into_any(),
                AboutContent::Bio(bio) => {
                    view! {
                        <p>{bio.about_me}</p>
                        <div class="headshotContainer">
                            <img src=bio.headshot_src alt="Headshot"/>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

//! The single portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Kicks off the two document reads as independent tasks on hydration so a
//! slow or failed read in one section never holds up the other, then lays
//! out the sections.

use leptos::prelude::*;

use crate::components::about_me::AboutMe;
use crate::components::contact_form::ContactForm;
use crate::components::modal::Modal;
use crate::components::project_gallery::ProjectGallery;
use crate::state::gallery::GalleryState;
use crate::state::profile::ProfileState;

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileState>>();
    let gallery = expect_context::<RwSignal<GalleryState>>();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(load_profile(profile));
        leptos::task::spawn_local(load_projects(gallery));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (profile, gallery);
    }

    view! {
        <main class="home-page">
            <AboutMe/>
            <ProjectGallery/>
            <ContactForm/>
            <Modal/>
        </main>
    }
}

#[cfg(feature = "hydrate")]
async fn load_profile(profile: RwSignal<ProfileState>) {
    let result = crate::net::api::fetch_profile().await;
    if let Err(e) = &result {
        leptos::logging::error!("Error fetching aboutMeData.json: {e}");
    }
    profile.update(|p| p.finish(result));
}

#[cfg(feature = "hydrate")]
async fn load_projects(gallery: RwSignal<GalleryState>) {
    let result = crate::net::api::fetch_projects().await;
    if let Err(e) = &result {
        leptos::logging::error!("Error fetching projectsData.json: {e}");
    }
    gallery.update(|g| g.finish(result));
}

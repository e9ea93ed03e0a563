//! Project gallery: spotlight panel, card list, and the two scroll arrows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `GalleryState` for cards and selection and `ScrollerState` for the
//! list axis. The breakpoint subscription is installed once, on hydration,
//! and is the only writer of the scroller axis. A failed read renders nothing
//! here; its message is shown by the "about me" section.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::project_spotlight::ProjectSpotlight;
use crate::state::gallery::GalleryState;
#[cfg(feature = "hydrate")]
use crate::state::scroller::ListExtent;
use crate::state::scroller::{ScrollTrigger, ScrollerState};

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let scroller = expect_context::<RwSignal<ScrollerState>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::breakpoint;

        scroller.set(ScrollerState::new(breakpoint::matches_now()));
        breakpoint::subscribe(move |matches| scroller.update(|s| s.on_breakpoint_change(matches)));
    }

    let cards = Memo::new(move |_| gallery.with(GalleryState::cards));
    let on_select = Callback::new(move |project_id: String| {
        gallery.update(|g| {
            g.select(&project_id);
        });
    });

    let on_arrow = move |trigger: ScrollTrigger| {
        #[cfg(feature = "hydrate")]
        {
            let Some(list) = list_ref.get_untracked() else {
                return;
            };
            scroll_list(&list, scroller.get_untracked(), trigger);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (trigger, scroller, list_ref);
        }
    };

    view! {
        <section id="projects" class="projects">
            <Show when=move || gallery.with(|g| g.error.is_none())>
                <ProjectSpotlight/>
                <div class="projectNavigation">
                    <button
                        class="arrow-left"
                        type="button"
                        aria-label="Previous projects"
                        on:click=move |_| on_arrow(ScrollTrigger::Previous)
                    >
                        "‹"
                    </button>
                    <div id="projectList" class="projectList" node_ref=list_ref>
                        {move || {
                            cards
                                .get()
                                .into_iter()
                                .map(|card| view! { <ProjectCard card=card on_select=on_select/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <button
                        class="arrow-right"
                        type="button"
                        aria-label="Next projects"
                        on:click=move |_| on_arrow(ScrollTrigger::Next)
                    >
                        "›"
                    </button>
                </div>
            </Show>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn scroll_list(list: &web_sys::HtmlDivElement, scroller: ScrollerState, trigger: ScrollTrigger) {
    let extent = ListExtent { width: f64::from(list.offset_width()), height: f64::from(list.offset_height()) };
    let request = scroller.request(trigger, extent);

    let options = web_sys::ScrollToOptions::new();
    options.set_left(request.left);
    options.set_top(request.top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    list.scroll_by_with_scroll_to_options(&options);
}

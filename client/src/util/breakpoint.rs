//! Responsive breakpoint probe.
//!
//! Wraps `window.matchMedia` for the gallery's mobile breakpoint. Must stay in
//! step with the `@media` threshold in the stylesheet. Requires a browser
//! environment; SSR paths report "no match" and never subscribe.

#[cfg(test)]
#[path = "breakpoint_test.rs"]
mod breakpoint_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast as _, closure::Closure};

/// Media query for narrow (mobile) viewports.
pub const MOBILE_BREAKPOINT_QUERY: &str = "(max-width: 768px)";

#[cfg(feature = "hydrate")]
fn media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(MOBILE_BREAKPOINT_QUERY).ok().flatten()
}

/// Whether the viewport currently matches the mobile breakpoint.
pub fn matches_now() -> bool {
    #[cfg(feature = "hydrate")]
    {
        media_query().is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Invoke `on_change` with the new match state every time the breakpoint
/// flips. The listener lives for the rest of the page.
pub fn subscribe(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let Some(mq) = media_query() else {
            leptos::logging::warn!("matchMedia unavailable; scroller keeps its initial axis");
            return;
        };
        let listener = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        if mq
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("failed to subscribe to {MOBILE_BREAKPOINT_QUERY}");
            return;
        }
        listener.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}

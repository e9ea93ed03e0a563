//! Reactive state slices provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each section owns one plain struct wrapped in an `RwSignal` by `App`.
//! Structs carry the decisions (selection, validation, scroll planning) so
//! components stay thin and the logic is testable without a browser.

pub mod contact;
pub mod gallery;
pub mod modal;
pub mod profile;
pub mod scroller;

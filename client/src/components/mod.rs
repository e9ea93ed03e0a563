//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections while reading/writing shared state
//! from Leptos context providers.

pub mod about_me;
pub mod contact_form;
pub mod modal;
pub mod project_card;
pub mod project_gallery;
pub mod project_spotlight;

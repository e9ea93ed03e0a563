//! Networking modules for the page's two static documents.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the reads and `types` defines the document schema.

pub mod api;
pub mod types;

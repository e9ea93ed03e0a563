//! Pure helpers behind the gallery: image path rewriting and the mobile
//! breakpoint that picks the scroller axis.

pub mod breakpoint;
pub mod image_path;

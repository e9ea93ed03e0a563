//! Image path normalization.
//!
//! The data documents are authored next to `images/` one directory down from
//! the page, so their paths start with `../`. The page serves both from the
//! same root, so that leading segment is rewritten to `./` before use.

#[cfg(test)]
#[path = "image_path_test.rs"]
mod image_path_test;

const PARENT_PREFIX: &str = "../";
const CURRENT_PREFIX: &str = "./";

/// Rewrite a leading `../` to `./`. Any other path is returned unchanged.
pub fn rewrite_image_path(path: &str) -> String {
    match path.strip_prefix(PARENT_PREFIX) {
        Some(rest) => format!("{CURRENT_PREFIX}{rest}"),
        None => path.to_owned(),
    }
}

/// Inline `background-image` value for a card image path.
pub fn background_image_value(path: &str) -> String {
    format!("url({})", rewrite_image_path(path))
}

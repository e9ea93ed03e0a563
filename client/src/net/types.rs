//! Wire schema for the two static JSON documents the page reads.
//!
//! DESIGN
//! ======
//! Field names follow the documents verbatim so they can be authored by hand
//! without a build step. Image paths are kept as written; the render layer
//! normalizes them (see `util::image_path`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Biography document (`aboutMeData.json`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Free-text biography paragraph.
    #[serde(rename = "aboutMe")]
    pub about_me: String,
    /// Headshot image path, relative to the data directory.
    pub headshot: String,
}

/// One entry of the project list document (`projectsData.json`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier; doubles as the card's element id.
    pub project_id: String,
    pub project_name: String,
    /// Card blurb.
    pub short_description: String,
    /// Spotlight body text.
    pub long_description: String,
    /// Card background image path.
    #[serde(default)]
    pub card_image: Option<String>,
    /// Spotlight panel image path.
    #[serde(default)]
    pub spotlight_image: Option<String>,
    /// Outbound link shown in the spotlight.
    pub url: String,
}

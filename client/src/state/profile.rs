//! "About me" section state.
//!
//! DESIGN
//! ======
//! The fetch outcome is folded into this struct by `finish`; the component
//! only reads it. Rendering inputs are derived through `ProfileView` so the
//! markup logic can be checked against literal fixtures.
//!
//! The "about me" container is also where a failed project read is reported,
//! so `about_content` folds both section states into what the container shows.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::api::FetchError;
use crate::net::types::Profile;
use crate::state::gallery::GalleryState;
use crate::util::image_path::rewrite_image_path;

/// Shown in place of the section when the biography cannot be read.
pub const PROFILE_LOAD_ERROR: &str = "Could not load the 'About Me' section.";

/// Load state for the biography section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileState {
    pub loading: bool,
    pub profile: Option<Profile>,
    pub error: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self { loading: true, profile: None, error: None }
    }
}

impl ProfileState {
    /// Record the outcome of the biography read. Either branch replaces
    /// whatever was shown before.
    pub fn finish(&mut self, result: Result<Profile, FetchError>) {
        self.loading = false;
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
            }
            Err(_) => {
                self.profile = None;
                self.error = Some(PROFILE_LOAD_ERROR.to_owned());
            }
        }
    }

    pub fn view(&self) -> Option<ProfileView> {
        self.profile.as_ref().map(ProfileView::from)
    }
}

/// Render-ready biography fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileView {
    pub about_me: String,
    pub headshot_src: String,
}

impl From<&Profile> for ProfileView {
    fn from(profile: &Profile) -> Self {
        Self { about_me: profile.about_me.clone(), headshot_src: rewrite_image_path(&profile.headshot) }
    }
}

/// What the "about me" container currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AboutContent {
    Pending,
    Bio(ProfileView),
    Error(String),
}

/// A project read failure takes over the container, ahead of the biography
/// or its own error text.
pub fn about_content(profile: &ProfileState, gallery: &GalleryState) -> AboutContent {
    if let Some(error) = &gallery.error {
        return AboutContent::Error(error.clone());
    }
    if let Some(error) = &profile.error {
        return AboutContent::Error(error.clone());
    }
    profile.view().map_or(AboutContent::Pending, AboutContent::Bio)
}

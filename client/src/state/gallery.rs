//! Project gallery state: the loaded list plus the single spotlight selection.
//!
//! DESIGN
//! ======
//! Cards refer to their project by `project_id` and selection goes through an
//! explicit id lookup, so the spotlight can be driven without any DOM.
//! Once a non-empty list has loaded exactly one project is spotlighted; an
//! empty list leaves the spotlight unset.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::api::FetchError;
use crate::net::types::Project;
use crate::util::image_path::{background_image_value, rewrite_image_path};

/// Shown in place of the gallery when the project list cannot be read.
pub const PROJECTS_LOAD_ERROR: &str = "Could not load the 'Projects' section.";

/// Label of the spotlight's outbound link.
pub const SPOTLIGHT_LINK_TEXT: &str = "Click here to see more...";

/// Load and selection state for the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    pub loading: bool,
    pub projects: Vec<Project>,
    pub spotlight_id: Option<String>,
    pub error: Option<String>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self { loading: true, projects: Vec::new(), spotlight_id: None, error: None }
    }
}

impl GalleryState {
    /// Record the outcome of the project list read.
    pub fn finish(&mut self, result: Result<Vec<Project>, FetchError>) {
        match result {
            Ok(projects) => self.load(projects),
            Err(_) => {
                self.loading = false;
                self.projects.clear();
                self.spotlight_id = None;
                self.error = Some(PROJECTS_LOAD_ERROR.to_owned());
            }
        }
    }

    /// Install a freshly loaded list and spotlight its first entry.
    pub fn load(&mut self, projects: Vec<Project>) {
        self.spotlight_id = projects.first().map(|p| p.project_id.clone());
        self.projects = projects;
        self.loading = false;
        self.error = None;
    }

    /// Spotlight the project with `project_id`. Unknown ids leave the current
    /// selection alone and return `false`.
    pub fn select(&mut self, project_id: &str) -> bool {
        if self.project(project_id).is_none() {
            return false;
        }
        self.spotlight_id = Some(project_id.to_owned());
        true
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.project_id == project_id)
    }

    pub fn spotlight(&self) -> Option<&Project> {
        self.spotlight_id.as_deref().and_then(|id| self.project(id))
    }

    pub fn is_spotlighted(&self, project_id: &str) -> bool {
        self.spotlight_id.as_deref() == Some(project_id)
    }

    /// Card view models in list order.
    pub fn cards(&self) -> Vec<CardView> {
        self.projects.iter().map(CardView::from).collect()
    }
}

/// Render-ready project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub short_description: String,
    /// Inline `background-image` value, when the project has a card image.
    pub background_image: Option<String>,
}

impl From<&Project> for CardView {
    fn from(project: &Project) -> Self {
        Self {
            id: project.project_id.clone(),
            name: project.project_name.clone(),
            short_description: project.short_description.clone(),
            background_image: project.card_image.as_deref().map(background_image_value),
        }
    }
}

/// Render-ready spotlight panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpotlightView {
    pub title: String,
    pub image_src: Option<String>,
    pub body: String,
    pub url: String,
}

impl From<&Project> for SpotlightView {
    fn from(project: &Project) -> Self {
        Self {
            title: project.project_name.clone(),
            image_src: project.spotlight_image.as_deref().map(rewrite_image_path),
            body: project.long_description.clone(),
            url: project.url.clone(),
        }
    }
}

use super::*;
use crate::state::gallery::PROJECTS_LOAD_ERROR;

fn profile() -> Profile {
    Profile { about_me: "Rust and maps.".to_owned(), headshot: "../images/me.png".to_owned() }
}

#[test]
fn default_state_is_loading() {
    let state = ProfileState::default();
    assert!(state.loading);
    assert!(state.profile.is_none());
    assert!(state.error.is_none());
    assert!(state.view().is_none());
}

#[test]
fn finish_ok_stores_profile() {
    let mut state = ProfileState::default();
    state.finish(Ok(profile()));
    assert!(!state.loading);
    assert_eq!(state.profile, Some(profile()));
    assert_eq!(state.error, None);
}

#[test]
fn finish_err_sets_fixed_message_only() {
    let mut state = ProfileState::default();
    state.finish(Err(FetchError::Status(500)));
    assert!(!state.loading);
    assert!(state.profile.is_none());
    assert_eq!(state.error.as_deref(), Some("Could not load the 'About Me' section."));
}

#[test]
fn finish_err_replaces_previous_profile() {
    let mut state = ProfileState::default();
    state.finish(Ok(profile()));
    state.finish(Err(FetchError::Transport("offline".to_owned())));
    assert!(state.profile.is_none());
    assert!(state.view().is_none());
}

#[test]
fn view_rewrites_headshot_path() {
    let view = ProfileView::from(&profile());
    assert_eq!(view.about_me, "Rust and maps.");
    assert_eq!(view.headshot_src, "./images/me.png");
}

// =============================================================
// Container contents
// =============================================================

#[test]
fn about_content_is_pending_until_biography_arrives() {
    let content = about_content(&ProfileState::default(), &GalleryState::default());
    assert_eq!(content, AboutContent::Pending);
}

#[test]
fn about_content_shows_biography_after_load() {
    let mut state = ProfileState::default();
    state.finish(Ok(profile()));
    let content = about_content(&state, &GalleryState::default());
    assert_eq!(
        content,
        AboutContent::Bio(ProfileView {
            about_me: "Rust and maps.".to_owned(),
            headshot_src: "./images/me.png".to_owned(),
        })
    );
}

#[test]
fn about_content_shows_profile_error() {
    let mut state = ProfileState::default();
    state.finish(Err(FetchError::Status(404)));
    let content = about_content(&state, &GalleryState::default());
    assert_eq!(content, AboutContent::Error(PROFILE_LOAD_ERROR.to_owned()));
}

#[test]
fn projects_failure_is_reported_in_about_container() {
    let mut state = ProfileState::default();
    state.finish(Ok(profile()));
    let mut gallery = GalleryState::default();
    gallery.finish(Err(FetchError::Status(500)));

    let content = about_content(&state, &gallery);
    assert_eq!(content, AboutContent::Error(PROJECTS_LOAD_ERROR.to_owned()));
}

#[test]
fn projects_failure_wins_over_profile_failure() {
    let mut state = ProfileState::default();
    state.finish(Err(FetchError::Transport("offline".to_owned())));
    let mut gallery = GalleryState::default();
    gallery.finish(Err(FetchError::Transport("offline".to_owned())));

    let content = about_content(&state, &gallery);
    assert_eq!(content, AboutContent::Error(PROJECTS_LOAD_ERROR.to_owned()));
}

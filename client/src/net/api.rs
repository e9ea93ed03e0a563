//! Document fetch helpers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `FetchError::Unavailable` since the
//! documents are only fetched from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, non-2xx status, malformed body) surfaces as
//! a typed `FetchError`. Callers decide what the user sees; the error detail
//! is meant for the console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Profile, Project};

/// Biography document path, relative to the page.
pub const ABOUT_ME_DOCUMENT: &str = "./data/aboutMeData.json";

/// Project list document path, relative to the page.
pub const PROJECTS_DOCUMENT: &str = "./data/projectsData.json";

/// Why a document read failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("malformed document: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Fetch and decode the biography document.
///
/// # Errors
///
/// Returns a `FetchError` if the request fails, the server responds with a
/// non-OK status, or the body does not decode as a `Profile`.
pub async fn fetch_profile() -> Result<Profile, FetchError> {
    fetch_document(ABOUT_ME_DOCUMENT).await
}

/// Fetch and decode the ordered project list.
///
/// # Errors
///
/// Returns a `FetchError` if the request fails, the server responds with a
/// non-OK status, or the body does not decode as a project array.
pub async fn fetch_projects() -> Result<Vec<Project>, FetchError> {
    fetch_document(PROJECTS_DOCUMENT).await
}

async fn fetch_document<T>(url: &str) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        decode_document(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(FetchError::Unavailable)
    }
}

/// Decode a document body. Split out so decoding is testable without a browser.
#[cfg(any(test, feature = "hydrate"))]
fn decode_document<T>(body: &str) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

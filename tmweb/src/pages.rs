//! Page route handlers
//!
//! Four server-rendered pages over the CMS, plus the favicon shortcut.
//! Each handler derives a CMS query from the request path, reshapes the
//! response into the keys its template expects, and renders.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use futures::try_join;
use tera::Context;
use tracing::debug;

use crate::error::{PageError, PageResult};
use crate::state::AppState;

/// Build the page router
///
/// Route order matters only for readability; the static `/playlists` and
/// `/favicon.ico` routes always win over the `/{slug}` capture.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/playlists", get(playlists))
        .route("/favicon.ico", get(favicon))
        .route("/{slug}", get(playlist_page))
        .route("/{playlist_slug}/{story_slug}", get(story_page))
        .with_state(state)
}

/// GET /favicon.ico
///
/// Browsers request this on every page; answering 204 here keeps the
/// request away from the CMS and out of the `/{slug}` capture.
async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// GET / - home page
async fn home(State(state): State<AppState>) -> PageResult<Html<String>> {
    // Both collections are fetched concurrently up front. The home layout
    // does not bind them yet, so a CMS outage is still visible here as a
    // 500 while the page itself stays static.
    let (playlists, stories) = try_join!(state.cms.list_playlists(), state.cms.list_stories())?;
    debug!(
        playlists = playlists.len(),
        stories = stories.len(),
        "Home data fetched"
    );

    let body = state.templates.render("index", &Context::new())?;
    Ok(Html(body))
}

/// GET /playlists - all playlists
async fn playlists(State(state): State<AppState>) -> PageResult<Html<String>> {
    let playlists = state.cms.list_playlists().await?;
    debug!(count = playlists.len(), "Rendering playlist overview");

    let mut context = Context::new();
    context.insert("playlist", &playlists);
    let body = state.templates.render("playlists", &context)?;
    Ok(Html(body))
}

/// GET /{slug} - one playlist with its stories
async fn playlist_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> PageResult<Html<String>> {
    let playlist = state
        .cms
        .playlist_by_slug(&slug)
        .await?
        .ok_or_else(|| PageError::not_found("playlist", &slug))?;

    let mut context = Context::new();
    context.insert("stories", &playlist.stories);
    context.insert("language", &playlist.language_id);
    context.insert("playlist", &playlist);
    let body = state.templates.render("playlist", &context)?;
    Ok(Html(body))
}

/// GET /{playlist_slug}/{story_slug} - one story
///
/// The playlist segment is accepted but not checked against the story's
/// back-reference; the story is looked up by its own slug alone.
async fn story_page(
    State(state): State<AppState>,
    Path((_playlist_slug, story_slug)): Path<(String, String)>,
) -> PageResult<Html<String>> {
    let story = state
        .cms
        .story_by_slug(&story_slug)
        .await?
        .ok_or_else(|| PageError::not_found("story", &story_slug))?;

    let mut context = Context::new();
    context.insert("story", &story);
    let body = state.templates.render("story", &context)?;
    Ok(Html(body))
}

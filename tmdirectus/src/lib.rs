//! Directus items API client for tmweb
//!
//! This crate provides a typed Rust client for the headless CMS backing the
//! story front-end. The CMS owns the data model; this crate covers exactly
//! the read paths the pages need:
//!
//! - **Playlists** (`tm_playlist`): listing, and single-playlist lookup by
//!   slug with nested story and language fields
//! - **Stories** (`tm_story`): listing, and single-story lookup by slug with
//!   the owning playlist's fields
//!
//! Queries are built through [`ItemsQuery`], which serializes the Directus
//! `filter`/`fields` parameters safely instead of interpolating raw strings
//! into the URL. Responses are parsed at the boundary into the models in
//! [`models`], so a payload that does not match the expected shape is a
//! typed error rather than a crash at some later field access.
//!
//! # Example
//!
//! ```no_run
//! use tmdirectus::DirectusClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DirectusClient::new()?;
//!
//!     for playlist in client.list_playlists().await? {
//!         println!("{:?} ({:?})", playlist.title, playlist.slug);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! There is no caching and no retry policy: every call performs one HTTP
//! GET and returns whatever the CMS answers.

pub mod client;
pub mod error;
pub mod models;
pub mod query;

// Re-exports
pub use client::{
    ClientBuilder, DirectusClient, DEFAULT_API_BASE, PLAYLIST_DETAIL_FIELDS, STORY_DETAIL_FIELDS,
};
pub use error::{Error, Result};
pub use models::{
    Envelope, Flag, Language, Playlist, PlaylistLink, PlaylistSummary, Related, Story, StoryLink,
    StorySummary,
};
pub use query::{Collection, ItemsQuery};

//! # tmweb - server-rendered front-end for the story CMS
//!
//! A small web application that turns CMS content (playlists of language
//! learning stories) into HTML pages:
//!
//! - `/` - home page
//! - `/playlists` - every playlist
//! - `/{slug}` - one playlist with its stories and language
//! - `/{playlist_slug}/{story_slug}` - one story
//! - `/favicon.ico` - always an empty 204
//!
//! The application holds no state of its own: every request fetches fresh
//! data through [`tmdirectus`], reshapes it into the keys the template
//! expects, and renders with Tera. Upstream failures become a logged 500,
//! unknown slugs a 404.

pub mod error;
pub mod pages;
pub mod state;

pub use error::{PageError, PageResult};
pub use pages::create_router;
pub use state::{AppState, load_templates};

//! HTTP client for the Directus items API
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
//!     let playlists = client.list_playlists().await?;
//!     println!("{} playlists", playlists.len());
//!
//!     if let Some(playlist) = client.playlist_by_slug("intro").await? {
//!         println!("{:?} has {} stories", playlist.title, playlist.stories.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::{Envelope, Playlist, Story};
use crate::query::{Collection, ItemsQuery};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default Directus items API base URL
pub const DEFAULT_API_BASE: &str = "https://fdnd-agency.directus.app/items";

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "tmweb/0.1.0 (tmdirectus)";

/// Fields selected when loading a single playlist with its stories
pub const PLAYLIST_DETAIL_FIELDS: &[&str] = &[
    "title",
    "description",
    "slug",
    "stories.tm_story_id.title",
    "stories.tm_story_id.summary",
    "stories.tm_story_id.image",
    "stories.tm_story_id.slug",
    "language_id.language",
    "language_id.flag.id",
];

/// Fields selected when loading a single story with its owning playlist
pub const STORY_DETAIL_FIELDS: &[&str] = &[
    "title",
    "description",
    "slug",
    "image",
    "video",
    "playlist.tm_playlist_id.title",
    "playlist.tm_playlist_id.slug",
    "playlist.tm_playlist_id.description",
];

/// Directus items API client
///
/// The client is stateless: no caching, no retries, every call hits the
/// network. Request-scoped data lives and dies with the caller.
#[derive(Debug, Clone)]
pub struct DirectusClient {
    pub(crate) client: Client,
    api_base: String,
    request_timeout: Option<Duration>,
}

impl DirectusClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom reqwest::Client
    ///
    /// Useful for sharing HTTP connection pools or custom proxy settings
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: None,
        }
    }

    /// Get the API base URL
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    // ========================================================================
    // Generic item fetch
    // ========================================================================

    /// Run a query and return the unwrapped item list
    ///
    /// Issues one GET, rejects non-2xx statuses, parses the `{ data: [...] }`
    /// envelope and hands back the payload.
    pub async fn items<T: DeserializeOwned>(&self, query: &ItemsQuery) -> Result<Vec<T>> {
        let url = query.to_url(&self.api_base)?;
        tracing::debug!(url = %url, "Fetching items");

        let mut request = self.client.get(url);
        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                collection: query.collection().as_str(),
                status: status.as_u16(),
            });
        }

        let envelope: Envelope<Vec<T>> = response.json().await?;
        let items = envelope.into_inner();
        tracing::debug!(
            collection = query.collection().as_str(),
            count = items.len(),
            "Unwrapped data envelope"
        );

        Ok(items)
    }

    // ========================================================================
    // Collection operations
    // ========================================================================

    /// All playlist records, full shape, unfiltered
    pub async fn list_playlists(&self) -> Result<Vec<Playlist>> {
        self.items(&ItemsQuery::new(Collection::Playlists)).await
    }

    /// All story records, full shape, unfiltered
    pub async fn list_stories(&self) -> Result<Vec<Story>> {
        self.items(&ItemsQuery::new(Collection::Stories)).await
    }

    /// Look up one playlist by slug, including its stories and language
    ///
    /// Returns the first match, or `None` when no playlist carries the slug.
    pub async fn playlist_by_slug(&self, slug: &str) -> Result<Option<Playlist>> {
        let query = ItemsQuery::new(Collection::Playlists)
            .filter_eq("slug", slug)
            .fields(PLAYLIST_DETAIL_FIELDS.iter().copied());

        let mut playlists: Vec<Playlist> = self.items(&query).await?;
        if playlists.is_empty() {
            Ok(None)
        } else {
            Ok(Some(playlists.remove(0)))
        }
    }

    /// Look up one story by slug, including its owning playlist
    ///
    /// Returns the first match, or `None` when no story carries the slug.
    pub async fn story_by_slug(&self, slug: &str) -> Result<Option<Story>> {
        let query = ItemsQuery::new(Collection::Stories)
            .filter_eq("slug", slug)
            .fields(STORY_DETAIL_FIELDS.iter().copied());

        let mut stories: Vec<Story> = self.items(&query).await?;
        if stories.is_empty() {
            Ok(None)
        } else {
            Ok(Some(stories.remove(0)))
        }
    }
}

/// Builder for configuring a DirectusClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    api_base: String,
    user_agent: String,
    request_timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the items API base URL
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a per-request timeout
    ///
    /// There is none by default; a hung CMS response stalls that request
    /// until the connection drops.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DirectusClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder().user_agent(&self.user_agent).build()?,
        };

        Ok(DirectusClient {
            client,
            api_base: self.api_base,
            request_timeout: self.request_timeout,
        })
    }
}

//! Data models for Directus items API responses
//!
//! The CMS owns the schema; these structures only describe the slices this
//! front-end asks for. Because every detail query uses field selection,
//! partial objects are the norm, so scalar fields are lenient: `Option` with
//! `#[serde(default)]` throughout.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{ "data": ... }` wrapper Directus puts around every payload
///
/// Deserializing into this type is the envelope check: a response without a
/// `data` member is a typed JSON error at the boundary instead of a crash
/// further down.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    /// The actual payload
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope, discarding the wrapper
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// A relational member, either expanded into an object or a raw key
///
/// Directus only expands a relation when the query selects nested fields
/// through it. Without a field selection the member carries the foreign
/// key itself (`"language_id": 5`, `"stories": [1, 2, 3]`), so both wire
/// shapes have to deserialize.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Related<T> {
    /// Nested object, present when the query expanded the relation
    Expanded(T),
    /// Raw foreign key (integer or UUID string)
    Key(Value),
}

impl<T> Related<T> {
    /// The expanded object, if the relation was expanded
    pub fn expanded(&self) -> Option<&T> {
        match self {
            Related::Expanded(value) => Some(value),
            Related::Key(_) => None,
        }
    }

    /// Consume into the expanded object, if any
    pub fn into_expanded(self) -> Option<T> {
        match self {
            Related::Expanded(value) => Some(value),
            Related::Key(_) => None,
        }
    }
}

// ============================================================================
// Playlist Models
// ============================================================================

/// A `tm_playlist` record
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Playlist {
    /// Display title
    #[serde(default)]
    pub title: Option<String>,
    /// Longer description shown on the playlist page
    #[serde(default)]
    pub description: Option<String>,
    /// URL identifier, unique per playlist
    #[serde(default)]
    pub slug: Option<String>,
    /// Ordered junction rows linking to the playlist's stories
    #[serde(default)]
    pub stories: Vec<Related<StoryLink>>,
    /// Language of the playlist's stories
    #[serde(default)]
    pub language_id: Option<Related<Language>>,
}

/// Junction row between a playlist and one of its stories
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct StoryLink {
    /// The linked story, shaped by the field selection of the query
    #[serde(default)]
    pub tm_story_id: Option<StorySummary>,
}

/// The story fields selected on the playlist page
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct StorySummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Image asset ID
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// The language a playlist teaches
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Language {
    /// Language name
    #[serde(default)]
    pub language: Option<String>,
    /// Flag image asset
    #[serde(default)]
    pub flag: Option<Flag>,
}

/// Reference to a flag image asset
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Flag {
    /// Asset ID
    #[serde(default)]
    pub id: Option<String>,
}

// ============================================================================
// Story Models
// ============================================================================

/// A `tm_story` record
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Story {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// URL identifier, unique per story
    #[serde(default)]
    pub slug: Option<String>,
    /// Image asset ID
    #[serde(default)]
    pub image: Option<String>,
    /// Video asset ID or URL
    #[serde(default)]
    pub video: Option<String>,
    /// Junction rows back to the owning playlist(s)
    #[serde(default)]
    pub playlist: Vec<Related<PlaylistLink>>,
}

/// Junction row between a story and its owning playlist
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PlaylistLink {
    /// The linked playlist, shaped by the field selection of the query
    #[serde(default)]
    pub tm_playlist_id: Option<PlaylistSummary>,
}

/// The playlist fields selected on the story page
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PlaylistSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_unwraps_payload() {
        let envelope: Envelope<Vec<Playlist>> = serde_json::from_value(json!({
            "data": [{ "slug": "intro", "title": "Intro" }]
        }))
        .unwrap();

        let playlists = envelope.into_inner();
        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].slug.as_deref(), Some("intro"));
        assert_eq!(playlists[0].title.as_deref(), Some("Intro"));
    }

    #[test]
    fn missing_envelope_is_a_typed_error() {
        let result: Result<Envelope<Vec<Playlist>>, _> = serde_json::from_value(json!({
            "items": []
        }));

        assert!(result.is_err());
    }

    #[test]
    fn partial_playlist_record_deserializes() {
        // Field selection means most members can be absent.
        let playlist: Playlist = serde_json::from_value(json!({
            "slug": "intro",
            "title": "Intro",
            "stories": [{ "tm_story_id": { "title": "S1" } }]
        }))
        .unwrap();

        assert_eq!(playlist.stories.len(), 1);
        let link = playlist.stories[0].expanded().unwrap();
        let story = link.tm_story_id.as_ref().unwrap();
        assert_eq!(story.title.as_deref(), Some("S1"));
        assert!(story.slug.is_none());
        assert!(playlist.language_id.is_none());
    }

    #[test]
    fn unexpanded_relations_keep_their_raw_keys() {
        // Without a field selection Directus returns relational members as
        // foreign keys, not nested objects.
        let playlist: Playlist = serde_json::from_value(json!({
            "title": "Intro",
            "slug": "intro",
            "stories": [1, 2, 3],
            "language_id": 5
        }))
        .unwrap();

        assert_eq!(playlist.stories.len(), 3);
        assert!(playlist.stories[0].expanded().is_none());
        let language = playlist.language_id.unwrap();
        assert!(language.into_expanded().is_none());
    }

    #[test]
    fn unexpanded_story_backref_keeps_its_raw_keys() {
        let story: Story = serde_json::from_value(json!({
            "title": "S1",
            "slug": "s1",
            "playlist": [7]
        }))
        .unwrap();

        assert_eq!(story.playlist.len(), 1);
        assert!(story.playlist[0].expanded().is_none());
    }

    #[test]
    fn story_with_playlist_backref_deserializes() {
        let story: Story = serde_json::from_value(json!({
            "title": "S1",
            "slug": "s1",
            "video": "abc",
            "playlist": [{ "tm_playlist_id": { "title": "Intro", "slug": "intro" } }]
        }))
        .unwrap();

        assert_eq!(story.playlist.len(), 1);
        let link = story.playlist[0].expanded().unwrap();
        let owner = link.tm_playlist_id.as_ref().unwrap();
        assert_eq!(owner.slug.as_deref(), Some("intro"));
    }

    #[test]
    fn null_junction_target_is_tolerated() {
        // Directus returns null targets for dangling junction rows.
        let link: StoryLink = serde_json::from_value(json!({ "tm_story_id": null })).unwrap();
        assert!(link.tm_story_id.is_none());
    }
}

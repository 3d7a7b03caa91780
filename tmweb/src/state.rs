//! Shared application state
//!
//! One `AppState` is built at startup and cloned into every handler. It
//! holds the CMS client and the compiled template set; there is no mutable
//! state, so clones are cheap and requests never contend.

use std::sync::Arc;
use tera::Tera;
use tmdirectus::DirectusClient;

/// State injected into every page handler
#[derive(Clone)]
pub struct AppState {
    /// Client for the headless CMS
    pub cms: DirectusClient,
    /// Compiled template set
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(cms: DirectusClient, templates: Tera) -> Self {
        Self {
            cms,
            templates: Arc::new(templates),
        }
    }
}

/// Compile the page templates
///
/// Templates ship inside the binary; there is nothing to deploy next to the
/// executable.
pub fn load_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("index", include_str!("../templates/index.html")),
        ("playlists", include_str!("../templates/playlists.html")),
        ("playlist", include_str!("../templates/playlist.html")),
        ("story", include_str!("../templates/story.html")),
    ])?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_compile() {
        let tera = load_templates().unwrap();
        let names: Vec<&str> = tera.get_template_names().collect();
        for expected in ["index", "playlists", "playlist", "story"] {
            assert!(names.contains(&expected), "missing template {expected}");
        }
    }
}

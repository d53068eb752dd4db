//! The static catalog of users, apps and discussions.
//!
//! A catalog is seeded once at startup, either from the bundled fixture or
//! from a JSON file named in the configuration. After that it is read-only,
//! apart from the optimistic like counter and apps published during the
//! session. Nothing is ever written back.

mod fixture;
pub mod views;

use std::path::Path;

use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::types::{CatalogApp, Comment, DiscussionPost, User};

pub use views::{
    filter_discussions, ranking, visible_catalog, DiscussionFilter, FeaturedCarousel, HomeTab,
    RankingBoard, RankingEntry, RANKING_LIMIT, RECOMMEND_EXTRA,
};

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// In-memory catalog.
///
/// Invariant: there is at least one user, and the first user is the
/// distinguished current user.
#[derive(Debug, Clone)]
pub struct Catalog {
    users: Vec<User>,
    apps: Vec<CatalogApp>,
    discussions: Vec<DiscussionPost>,
    comments: Vec<Comment>,
}

impl Catalog {
    /// Build a catalog from already-hydrated records.
    pub fn new(
        users: Vec<User>,
        apps: Vec<CatalogApp>,
        discussions: Vec<DiscussionPost>,
        comments: Vec<Comment>,
    ) -> Result<Self> {
        if users.is_empty() {
            return Err(Error::Catalog("catalog has no users".to_string()));
        }
        if let Some(id) = fixture::first_duplicate(users.iter().map(|u| u.id.as_str())) {
            return Err(Error::Catalog(format!("duplicate user id {}", id)));
        }
        if let Some(id) = fixture::first_duplicate(apps.iter().map(|a| a.id.as_str())) {
            return Err(Error::Catalog(format!("duplicate app id {}", id)));
        }

        Ok(Self {
            users,
            apps,
            discussions,
            comments,
        })
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parse a catalog from fixture JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: fixture::RawCatalog = serde_json::from_str(json)?;
        raw.hydrate()
    }

    /// Load a catalog fixture from disk.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            users = catalog.users.len(),
            apps = catalog.apps.len(),
            discussions = catalog.discussions.len(),
            "Loaded catalog fixture"
        );
        Ok(catalog)
    }

    /// Load the configured catalog, falling back to the bundled one.
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        match &config.path {
            Some(path) => Self::load_from(path),
            None => Self::bundled(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn apps(&self) -> &[CatalogApp] {
        &self.apps
    }

    pub fn discussions(&self) -> &[DiscussionPost] {
        &self.discussions
    }

    /// Comments every detail page starts with.
    pub fn seed_comments(&self) -> &[Comment] {
        &self.comments
    }

    /// The user this session acts as.
    pub fn current_user(&self) -> &User {
        &self.users[0]
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn app(&self, id: &str) -> Option<&CatalogApp> {
        self.apps.iter().find(|a| a.id == id)
    }

    /// Apps authored by `user_id`, in catalog order.
    pub fn apps_by(&self, user_id: &str) -> Vec<&CatalogApp> {
        self.apps.iter().filter(|a| a.author.id == user_id).collect()
    }

    /// Featured apps, in catalog order.
    pub fn featured(&self) -> Vec<&CatalogApp> {
        self.apps.iter().filter(|a| a.featured).collect()
    }

    /// Apply an optimistic like or unlike. Returns the new like count, or
    /// `None` if the app isn't in the catalog.
    pub fn set_liked(&mut self, app_id: &str, liked: bool) -> Option<u64> {
        let app = self.apps.iter_mut().find(|a| a.id == app_id)?;
        app.likes = if liked {
            app.likes.saturating_add(1)
        } else {
            app.likes.saturating_sub(1)
        };
        Some(app.likes)
    }

    /// Add an app published during this session.
    pub fn insert_app(&mut self, app: CatalogApp) -> Result<()> {
        if self.app(&app.id).is_some() {
            return Err(Error::Catalog(format!("duplicate app id {}", app.id)));
        }
        tracing::debug!(app_id = %app.id, title = %app.title, "Inserted published app");
        self.apps.push(app);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.current_user().id, "1");
        assert_eq!(catalog.apps().len(), 8);
        assert_eq!(catalog.discussions().len(), 5);
        assert_eq!(catalog.seed_comments().len(), 2);

        // Authors are hydrated from the user list
        let app = catalog.app("a3").unwrap();
        assert_eq!(app.author.name, "王芳");
    }

    #[test]
    fn test_unknown_author_is_rejected() {
        let json = r#"{
            "users": [{"id": "1", "name": "A", "username": "a", "avatar": ""}],
            "apps": [{
                "id": "x", "title": "t", "description": "d", "author_id": "9",
                "created_at": "2026-01-01T00:00:00Z"
            }]
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Catalog(msg) if msg.contains("unknown author 9")));
    }

    #[test]
    fn test_empty_user_list_is_rejected() {
        let err = Catalog::from_json(r#"{"users": []}"#).unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn test_duplicate_app_ids_are_rejected() {
        let json = r#"{
            "users": [{"id": "1", "name": "A", "username": "a", "avatar": ""}],
            "apps": [
                {"id": "x", "title": "t", "description": "d", "author_id": "1",
                 "created_at": "2026-01-01T00:00:00Z"},
                {"id": "x", "title": "u", "description": "e", "author_id": "1",
                 "created_at": "2026-01-02T00:00:00Z"}
            ]
        }"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn test_apps_by_author_keeps_catalog_order() {
        let catalog = Catalog::bundled().unwrap();
        let ids: Vec<_> = catalog.apps_by("2").iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a3", "a5", "a6"]);
        assert!(catalog.apps_by("4").is_empty());
    }

    #[test]
    fn test_like_toggle_adjusts_counter() {
        let mut catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.set_liked("a1", true), Some(329));
        assert_eq!(catalog.set_liked("a1", false), Some(328));
        assert_eq!(catalog.set_liked("missing", true), None);
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load_from(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

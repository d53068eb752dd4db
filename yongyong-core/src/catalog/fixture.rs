//! On-disk shape of a catalog fixture.
//!
//! Fixtures reference authors by user id; [`RawCatalog::hydrate`] swaps the
//! ids for full [`User`] records and rejects ids that don't resolve.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::Catalog;
use crate::error::{Error, Result};
use crate::types::{AppKind, CatalogApp, Comment, DiscussionCategory, DiscussionPost, User};

#[derive(Debug, Deserialize)]
pub(super) struct RawCatalog {
    users: Vec<User>,
    #[serde(default)]
    apps: Vec<RawApp>,
    #[serde(default)]
    discussions: Vec<RawDiscussion>,
    #[serde(default)]
    comments: Vec<RawComment>,
}

#[derive(Debug, Deserialize)]
struct RawApp {
    id: String,
    title: String,
    description: String,
    #[serde(default)]
    thumbnail: String,
    author_id: String,
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    comments: u64,
    #[serde(default)]
    shares: u64,
    #[serde(default)]
    views: u64,
    #[serde(default)]
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    kind: AppKind,
    url: Option<String>,
    code_snippet: Option<String>,
    #[serde(default)]
    featured: bool,
}

#[derive(Debug, Deserialize)]
struct RawDiscussion {
    id: String,
    title: String,
    content: String,
    author_id: String,
    category: DiscussionCategory,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    replies: u64,
    #[serde(default)]
    views: u64,
    created_at: DateTime<Utc>,
    thumbnail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawComment {
    id: String,
    author_id: String,
    content: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    likes: u64,
}

impl RawCatalog {
    /// Resolve author ids and build a [`Catalog`].
    pub(super) fn hydrate(self) -> Result<Catalog> {
        let RawCatalog {
            users,
            apps: raw_apps,
            discussions: raw_discussions,
            comments: raw_comments,
        } = self;

        let (apps, discussions, comments) = {
            let users_by_id: HashMap<&str, &User> =
                users.iter().map(|u| (u.id.as_str(), u)).collect();

            let author = |kind: &str, owner: &str, author_id: &str| -> Result<User> {
                users_by_id
                    .get(author_id)
                    .map(|u| (*u).clone())
                    .ok_or_else(|| {
                        Error::Catalog(format!(
                            "{} {} references unknown author {}",
                            kind, owner, author_id
                        ))
                    })
            };

            let mut apps = Vec::with_capacity(raw_apps.len());
            for raw in raw_apps {
                apps.push(CatalogApp {
                    author: author("app", &raw.id, &raw.author_id)?,
                    id: raw.id,
                    title: raw.title,
                    description: raw.description,
                    thumbnail: raw.thumbnail,
                    likes: raw.likes,
                    comments: raw.comments,
                    shares: raw.shares,
                    views: raw.views,
                    tags: raw.tags,
                    created_at: raw.created_at,
                    kind: raw.kind,
                    url: raw.url,
                    code_snippet: raw.code_snippet,
                    featured: raw.featured,
                });
            }

            let mut discussions = Vec::with_capacity(raw_discussions.len());
            for raw in raw_discussions {
                discussions.push(DiscussionPost {
                    author: author("discussion", &raw.id, &raw.author_id)?,
                    id: raw.id,
                    title: raw.title,
                    content: raw.content,
                    category: raw.category,
                    tags: raw.tags,
                    likes: raw.likes,
                    replies: raw.replies,
                    views: raw.views,
                    created_at: raw.created_at,
                    thumbnail: raw.thumbnail,
                });
            }

            let mut comments = Vec::with_capacity(raw_comments.len());
            for raw in raw_comments {
                comments.push(Comment {
                    author: author("comment", &raw.id, &raw.author_id)?,
                    id: raw.id,
                    content: raw.content,
                    created_at: raw.created_at,
                    likes: raw.likes,
                });
            }

            (apps, discussions, comments)
        };

        Catalog::new(users, apps, discussions, comments)
    }
}

/// Returns the first id that appears more than once.
pub(super) fn first_duplicate<'a>(ids: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

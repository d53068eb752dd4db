//! The "publish new app" form.
//!
//! A [`PublishDraft`] collects the form fields. [`PublishDraft::validate`]
//! reports the first missing required field; nothing is submitted until it
//! passes. A valid draft becomes a [`CatalogApp`] that lives only for the
//! session.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::types::{AppKind, CatalogApp, User};

/// Maximum number of tags on a draft.
pub const MAX_TAGS: usize = 5;

/// Notice shown once a draft has been published.
pub const PUBLISHED_NOTICE: &str = "作品发布成功！";

/// Why a draft can't be published. Messages are shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishError {
    #[error("请输入应用标题")]
    MissingTitle,

    #[error("请输入应用描述")]
    MissingDescription,

    #[error("请输入应用链接")]
    MissingUrl,
}

/// Why a tag wasn't added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRejection {
    Blank,
    Duplicate,
    Full,
}

/// Form state for a new app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishDraft {
    pub title: String,
    pub description: String,
    pub kind: AppKind,
    pub url: String,
    tags: Vec<String>,
}

impl PublishDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether the tag input should still accept entries.
    pub fn can_add_tag(&self) -> bool {
        self.tags.len() < MAX_TAGS
    }

    /// Add a trimmed tag. Blank, duplicate and over-limit tags are refused.
    pub fn add_tag(&mut self, tag: &str) -> Result<(), TagRejection> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(TagRejection::Blank);
        }
        if !self.can_add_tag() {
            return Err(TagRejection::Full);
        }
        if self.tags.iter().any(|t| t == tag) {
            return Err(TagRejection::Duplicate);
        }
        self.tags.push(tag.to_string());
        Ok(())
    }

    /// Remove a tag; returns whether it was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Check required fields in form order.
    pub fn validate(&self) -> Result<(), PublishError> {
        if self.title.trim().is_empty() {
            return Err(PublishError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(PublishError::MissingDescription);
        }
        if self.kind == AppKind::ExternalLink && self.url.trim().is_empty() {
            return Err(PublishError::MissingUrl);
        }
        Ok(())
    }

    /// Validate and turn the draft into a catalog entry by `author`.
    pub fn publish(&self, author: &User, now: DateTime<Utc>) -> Result<CatalogApp, PublishError> {
        self.validate()?;

        let url = self.url.trim();
        Ok(CatalogApp {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            thumbnail: String::new(),
            author: author.clone(),
            likes: 0,
            comments: 0,
            shares: 0,
            views: 0,
            tags: self.tags.clone(),
            created_at: now,
            kind: self.kind,
            url: (self.kind.takes_url() && !url.is_empty()).then(|| url.to_string()),
            code_snippet: None,
            featured: false,
        })
    }
}

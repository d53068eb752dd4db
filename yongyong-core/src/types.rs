//! Core domain types for yongyong
//!
//! These are the records the catalog is seeded with. Everything here is a
//! plain value: views receive borrowed snapshots and never write back,
//! except for the like counter on [`CatalogApp`].
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **User** | A person on the platform; every app and post has one as author |
//! | **Creator** | A user viewed through their profile or their agent chat |
//! | **App** | A published web app, snippet, package or script |
//! | **Discussion** | A community post in one of four categories |
//! | **Current user** | The distinguished user the session acts as |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Users
// ============================================

/// A platform user. Identity key is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Display name (e.g. "李明")
    pub name: String,
    /// Handle without the leading `@`
    pub username: String,
    /// Avatar image reference
    pub avatar: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl User {
    /// Returns the handle with a leading `@`.
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }

    /// First character of the display name, used where an avatar can't be drawn.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

// ============================================
// Apps
// ============================================

/// What kind of thing an app entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AppKind {
    /// Hosted web app reachable by URL
    #[default]
    #[serde(rename = "link")]
    ExternalLink,
    /// Code snippet (codepen and the like)
    #[serde(rename = "code")]
    CodeSnippet,
    /// Reusable component package
    #[serde(rename = "package")]
    Package,
    /// Standalone Python script
    #[serde(rename = "python")]
    Script,
}

impl AppKind {
    pub const ALL: [AppKind; 4] = [
        AppKind::ExternalLink,
        AppKind::CodeSnippet,
        AppKind::Package,
        AppKind::Script,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppKind::ExternalLink => "link",
            AppKind::CodeSnippet => "code",
            AppKind::Package => "package",
            AppKind::Script => "python",
        }
    }

    /// Label shown in the UI
    pub fn label(&self) -> &'static str {
        match self {
            AppKind::ExternalLink => "在线应用",
            AppKind::CodeSnippet => "代码片段",
            AppKind::Package => "组件包",
            AppKind::Script => "Python脚本",
        }
    }

    /// Whether the publish form asks for a URL for this kind.
    pub fn takes_url(&self) -> bool {
        matches!(self, AppKind::ExternalLink | AppKind::CodeSnippet)
    }
}

impl std::str::FromStr for AppKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "link" => Ok(AppKind::ExternalLink),
            "code" => Ok(AppKind::CodeSnippet),
            "package" => Ok(AppKind::Package),
            "python" => Ok(AppKind::Script),
            _ => Err(format!("unknown app kind: {}", s)),
        }
    }
}

/// A published app in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogApp {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Thumbnail image reference
    pub thumbnail: String,
    pub author: User,
    /// Like counter; the only field mutated after seeding
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub views: u64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub kind: AppKind,
    /// External URL for links and snippets
    pub url: Option<String>,
    pub code_snippet: Option<String>,
    /// Shown in the home carousel and always recommended
    pub featured: bool,
}

// ============================================
// Community
// ============================================

/// Category of a community discussion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscussionCategory {
    Tutorial,
    Tips,
    Showcase,
    Question,
}

impl DiscussionCategory {
    pub const ALL: [DiscussionCategory; 4] = [
        DiscussionCategory::Tutorial,
        DiscussionCategory::Tips,
        DiscussionCategory::Showcase,
        DiscussionCategory::Question,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DiscussionCategory::Tutorial => "教程",
            DiscussionCategory::Tips => "经验",
            DiscussionCategory::Showcase => "作品",
            DiscussionCategory::Question => "求助",
        }
    }
}

/// A community discussion post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: User,
    pub category: DiscussionCategory,
    pub tags: Vec<String>,
    pub likes: u64,
    pub replies: u64,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub thumbnail: Option<String>,
}

/// A comment on an app's detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: User,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_app_kind_round_trips_through_str() {
        for kind in AppKind::ALL {
            assert_eq!(AppKind::from_str(kind.as_str()), Ok(kind));
        }
        assert!(AppKind::from_str("binary").is_err());
    }

    #[test]
    fn test_only_links_and_snippets_take_urls() {
        assert!(AppKind::ExternalLink.takes_url());
        assert!(AppKind::CodeSnippet.takes_url());
        assert!(!AppKind::Package.takes_url());
        assert!(!AppKind::Script.takes_url());
    }

    #[test]
    fn test_user_handle_and_initial() {
        let user = User {
            id: "1".to_string(),
            name: "李明".to_string(),
            username: "liming".to_string(),
            avatar: String::new(),
            bio: None,
            cover_image: None,
        };
        assert_eq!(user.handle(), "@liming");
        assert_eq!(user.initial(), '李');
    }
}

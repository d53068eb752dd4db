//! Per-visit state of an app's detail page: the like toggle and comments.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::types::{Comment, User};

/// Notice text for a like toggle.
pub const LIKED_NOTICE: &str = "点赞成功！";
pub const UNLIKED_NOTICE: &str = "取消点赞";
pub const SHARED_NOTICE: &str = "链接已复制到剪贴板！";
pub const COMMENTED_NOTICE: &str = "评论发布成功！";

/// State for one visit to an app's detail page.
#[derive(Debug, Clone)]
pub struct AppDetail {
    app_id: String,
    liked: bool,
    comments: Vec<Comment>,
}

impl AppDetail {
    /// Start a visit, seeding the comment list from the catalog.
    pub fn open(app_id: &str, catalog: &Catalog) -> Self {
        Self {
            app_id: app_id.to_string(),
            liked: false,
            comments: catalog.seed_comments().to_vec(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Newest first.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Flip the like and nudge the catalog's counter. Returns the notice to
    /// show, or `None` if the app has left the catalog.
    pub fn toggle_like(&mut self, catalog: &mut Catalog) -> Option<&'static str> {
        let liked = !self.liked;
        catalog.set_liked(&self.app_id, liked)?;
        self.liked = liked;
        Some(if liked { LIKED_NOTICE } else { UNLIKED_NOTICE })
    }

    /// Post a comment as `author`. Blank text is ignored.
    pub fn add_comment(&mut self, author: &User, text: &str, now: DateTime<Utc>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.comments.insert(
            0,
            Comment {
                id: Uuid::new_v4().to_string(),
                author: author.clone(),
                content: text.to_string(),
                created_at: now,
                likes: 0,
            },
        );
        true
    }
}

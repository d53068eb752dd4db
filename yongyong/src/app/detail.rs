use chrono::Utc;
use yongyong_core::detail::{COMMENTED_NOTICE, SHARED_NOTICE};

use super::*;

impl App {
    // ========== Detail Page ==========

    /// Handle keyboard input on an app's detail page.
    pub(super) fn handle_detail_key(&mut self, key: KeyEvent) {
        if self.comment_input.is_some() {
            self.handle_comment_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc => self.go_home(),
            KeyCode::Char('l') => self.toggle_like(),
            KeyCode::Char('s') => self.show_notice(SHARED_NOTICE, NoticeKind::Info),
            KeyCode::Char('c') => self.comment_input = Some(String::new()),
            KeyCode::Char('a') => {
                let author = self
                    .detail
                    .as_ref()
                    .and_then(|d| self.catalog.app(d.app_id()))
                    .map(|app| app.author.id.clone());
                if let Some(author) = author {
                    self.open_profile(&author);
                }
            }
            _ => {}
        }
    }

    fn handle_comment_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.comment_input = None,
            KeyCode::Enter => self.submit_comment(),
            _ => {
                if let Some(input) = self.comment_input.as_mut() {
                    edit_text(input, key);
                }
            }
        }
    }

    fn toggle_like(&mut self) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        if let Some(notice) = detail.toggle_like(&mut self.catalog) {
            self.show_notice(notice, NoticeKind::Info);
        }
    }

    fn submit_comment(&mut self) {
        let text = self.comment_input.take().unwrap_or_default();
        let author = self.catalog.current_user();
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        if detail.add_comment(author, &text, Utc::now()) {
            tracing::debug!(app = detail.app_id(), "Comment added");
            self.show_notice(COMMENTED_NOTICE, NoticeKind::Info);
        }
    }
}

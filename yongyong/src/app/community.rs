use yongyong_core::catalog::filter_discussions;

use super::*;

impl App {
    // ========== Community Page ==========

    /// Handle keyboard input on the community page.
    pub(super) fn handle_community_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_home(),
            KeyCode::Tab => {
                self.community_filter = self.community_filter.next();
                self.community_table.select(Some(0));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.visible_post_count();
                select_next(&mut self.community_table, len);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let len = self.visible_post_count();
                select_previous(&mut self.community_table, len);
            }
            KeyCode::Enter | KeyCode::Char('a') => {
                let author = self.community_table.selected().and_then(|i| {
                    filter_discussions(self.catalog.discussions(), self.community_filter)
                        .get(i)
                        .map(|post| post.author.id.clone())
                });
                if let Some(author) = author {
                    self.open_profile(&author);
                }
            }
            _ => {}
        }
    }

    fn visible_post_count(&self) -> usize {
        filter_discussions(self.catalog.discussions(), self.community_filter).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{key, test_app};
    use yongyong_core::DiscussionCategory;

    #[test]
    fn test_filter_cycles_through_categories() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.page(), Page::Community);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(
            app.community_filter,
            DiscussionFilter::Category(DiscussionCategory::Tutorial)
        );
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.community_filter, DiscussionFilter::All);
    }

    #[test]
    fn test_enter_opens_post_author() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Tab)); // tutorials: d1, d5
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page(), Page::Profile);
        assert_eq!(app.navigator.state().selected_user.as_deref(), Some("2"));
    }
}

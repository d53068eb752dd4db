use super::*;

impl App {
    // ========== Home Page ==========

    /// Handle keyboard input on the home page.
    pub(super) fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.navigator.set_home_tab(self.navigator.home_tab().next());
                self.home_table.select(Some(0));
            }
            KeyCode::BackTab => {
                self.navigator
                    .set_home_tab(self.navigator.home_tab().previous());
                self.home_table.select(Some(0));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.navigator.visible_catalog(&self.catalog).len();
                select_next(&mut self.home_table, len);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let len = self.navigator.visible_catalog(&self.catalog).len();
                select_previous(&mut self.home_table, len);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.carousel.next(self.catalog.featured().len());
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.carousel.previous(self.catalog.featured().len());
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_home_app() {
                    self.open_app(&id);
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.current_featured_app() {
                    self.open_app(&id);
                }
            }
            KeyCode::Char('a') => {
                let author = self.selected_home_app().and_then(|id| {
                    self.catalog.app(&id).map(|app| app.author.id.clone())
                });
                if let Some(author) = author {
                    self.open_profile(&author);
                }
            }
            _ => {}
        }
    }

    /// Id of the highlighted app in the home list.
    pub fn selected_home_app(&self) -> Option<String> {
        let visible = self.navigator.visible_catalog(&self.catalog);
        self.home_table
            .selected()
            .and_then(|i| visible.get(i))
            .map(|app| app.id.clone())
    }

    /// Id of the app on the current carousel slide.
    pub fn current_featured_app(&self) -> Option<String> {
        let featured = self.catalog.featured();
        self.carousel
            .current(featured.len())
            .map(|i| featured[i].id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{key, test_app};
    use yongyong_core::HomeTab;

    #[test]
    fn test_tab_cycles_home_tabs() {
        let mut app = test_app();
        assert_eq!(app.navigator.home_tab(), HomeTab::Recommend);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.navigator.home_tab(), HomeTab::Trending);
        assert_eq!(app.selected_home_app().as_deref(), Some("a2"));
        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.navigator.home_tab(), HomeTab::Latest);
        assert_eq!(app.selected_home_app().as_deref(), Some("a5"));
    }

    #[test]
    fn test_enter_opens_selected_app() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page(), Page::Detail);
        assert_eq!(app.detail.as_ref().map(|d| d.app_id()), Some("a2"));
    }

    #[test]
    fn test_carousel_wraps_and_opens() {
        let mut app = test_app();
        assert_eq!(app.current_featured_app().as_deref(), Some("a1"));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.current_featured_app().as_deref(), Some("a2"));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.navigator.state().selected_app.as_deref(), Some("a1"));
    }

    #[test]
    fn test_author_shortcut_opens_profile() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.page(), Page::Profile);
        assert_eq!(app.navigator.state().selected_user.as_deref(), Some("2"));
    }
}

use super::*;

impl App {
    // ========== Profile Page ==========

    /// Handle keyboard input on a user's profile.
    pub(super) fn handle_profile_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_home(),
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.profile_apps().len();
                select_next(&mut self.profile_table, len);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let len = self.profile_apps().len();
                select_previous(&mut self.profile_table, len);
            }
            KeyCode::Enter => {
                let selected = self
                    .profile_table
                    .selected()
                    .and_then(|i| self.profile_apps().get(i).cloned());
                if let Some(id) = selected {
                    self.open_app(&id);
                }
            }
            KeyCode::Char('m') => {
                let outcome = self.navigator.chat_with_agent(&self.catalog);
                self.after_navigation(outcome);
            }
            _ => {}
        }
    }

    /// Ids of the apps by the profile's user, in catalog order.
    fn profile_apps(&self) -> Vec<String> {
        self.navigator
            .state()
            .selected_user
            .as_deref()
            .map(|user| {
                self.catalog
                    .apps_by(user)
                    .into_iter()
                    .map(|app| app.id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

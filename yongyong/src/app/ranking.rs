use yongyong_core::catalog::ranking;

use super::*;

impl App {
    // ========== Ranking Page ==========

    /// Handle keyboard input on the ranking page.
    pub(super) fn handle_ranking_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_home(),
            KeyCode::Tab => {
                self.ranking_board = self.ranking_board.next();
                self.ranking_table.select(Some(0));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = ranking(self.catalog.apps(), self.ranking_board).len();
                select_next(&mut self.ranking_table, len);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let len = ranking(self.catalog.apps(), self.ranking_board).len();
                select_previous(&mut self.ranking_table, len);
            }
            KeyCode::Enter => {
                let selected = self.ranking_table.selected().and_then(|i| {
                    ranking(self.catalog.apps(), self.ranking_board)
                        .get(i)
                        .map(|entry| entry.app.id.clone())
                });
                if let Some(id) = selected {
                    self.open_app(&id);
                }
            }
            _ => {}
        }
    }
}

use yongyong_core::SubmitOutcome;

use super::*;

impl App {
    // ========== Agent Chat Page ==========

    /// Handle keyboard input in the agent chat.
    pub(super) fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                let outcome = self.navigator.back_from_chat(&self.catalog);
                self.after_navigation(outcome);
            }
            KeyCode::Enter => self.send_chat_message(),
            _ => {
                edit_text(&mut self.chat_input, key);
            }
        }
    }

    /// Send the typed message. Input is kept while the agent is still composing.
    fn send_chat_message(&mut self) {
        let delay = self.next_reply_delay();
        let Some(chat) = self.chat.as_mut() else {
            return;
        };

        match chat.submit(&self.chat_input, Instant::now(), delay) {
            SubmitOutcome::Sent { .. } => {
                tracing::debug!(delay_ms = delay.as_millis() as u64, "Chat message sent");
                self.chat_input.clear();
            }
            SubmitOutcome::Blank | SubmitOutcome::Busy => {}
        }
    }
}

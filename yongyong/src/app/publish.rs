use chrono::Utc;
use yongyong_core::publish::{TagRejection, PUBLISHED_NOTICE};
use yongyong_core::AppKind;

use super::*;

impl App {
    // ========== Publish Page ==========

    /// Handle keyboard input on the publish form.
    pub(super) fn handle_publish_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.submit_draft();
            return;
        }

        match key.code {
            KeyCode::Esc => self.go_home(),
            KeyCode::Tab | KeyCode::Down => self.publish_field = self.publish_field.next(),
            KeyCode::BackTab | KeyCode::Up => self.publish_field = self.publish_field.previous(),
            _ => self.edit_publish_field(key),
        }
    }

    fn edit_publish_field(&mut self, key: KeyEvent) {
        match self.publish_field {
            PublishField::Title => {
                edit_text(&mut self.draft.title, key);
            }
            PublishField::Description => {
                edit_text(&mut self.draft.description, key);
            }
            PublishField::Url => {
                edit_text(&mut self.draft.url, key);
            }
            PublishField::Kind => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => {
                    self.draft.kind = cycle_kind(self.draft.kind, 1);
                }
                KeyCode::Left => {
                    self.draft.kind = cycle_kind(self.draft.kind, AppKind::ALL.len() - 1);
                }
                _ => {}
            },
            PublishField::Tags => match key.code {
                KeyCode::Enter => self.commit_tag(),
                KeyCode::Backspace if self.tag_input.is_empty() => {
                    if let Some(last) = self.draft.tags().last().cloned() {
                        self.draft.remove_tag(&last);
                    }
                }
                _ => {
                    if self.draft.can_add_tag() {
                        edit_text(&mut self.tag_input, key);
                    }
                }
            },
            PublishField::Submit => {
                if key.code == KeyCode::Enter {
                    self.submit_draft();
                }
            }
        }
    }

    fn commit_tag(&mut self) {
        match self.draft.add_tag(&self.tag_input) {
            Ok(()) | Err(TagRejection::Duplicate) => self.tag_input.clear(),
            Err(TagRejection::Blank) | Err(TagRejection::Full) => {}
        }
    }

    /// Validate and publish. On success the app joins the catalog and we go home.
    fn submit_draft(&mut self) {
        let app = match self.draft.publish(self.catalog.current_user(), Utc::now()) {
            Ok(app) => app,
            Err(e) => {
                self.show_notice(e.to_string(), NoticeKind::Error);
                return;
            }
        };

        let id = app.id.clone();
        if let Err(e) = self.catalog.insert_app(app) {
            tracing::warn!(error = %e, "Failed to add published app");
            self.show_notice(e.to_string(), NoticeKind::Error);
            return;
        }
        tracing::info!(app = %id, kind = self.draft.kind.as_str(), "App published");

        let outcome = self.navigator.published(&self.catalog);
        self.after_navigation(outcome);
        self.show_notice(PUBLISHED_NOTICE, NoticeKind::Info);
    }
}

fn cycle_kind(kind: AppKind, step: usize) -> AppKind {
    let idx = AppKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
    AppKind::ALL[(idx + step) % AppKind::ALL.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{key, test_app, type_text};
    use yongyong_core::publish::PublishError;
    use yongyong_core::HomeTab;

    fn on_publish() -> App {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.page(), Page::Publish);
        app
    }

    fn focus(app: &mut App, field: PublishField) {
        while app.publish_field != field {
            app.handle_key(key(KeyCode::Tab));
        }
    }

    fn ctrl_s() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_validation_errors_are_shown_in_order() {
        let mut app = on_publish();
        app.handle_key(ctrl_s());
        assert_eq!(
            app.notice.as_ref().map(|n| n.text.as_str()),
            Some("请输入应用标题")
        );
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Error);

        type_text(&mut app, "像素时钟");
        app.handle_key(ctrl_s());
        assert_eq!(
            app.notice.as_ref().unwrap().text,
            PublishError::MissingDescription.to_string()
        );

        focus(&mut app, PublishField::Description);
        type_text(&mut app, "复古时钟");
        app.handle_key(ctrl_s());
        assert_eq!(
            app.notice.as_ref().unwrap().text,
            PublishError::MissingUrl.to_string()
        );
        assert_eq!(app.page(), Page::Publish);
    }

    #[test]
    fn test_kind_cycles() {
        let mut app = on_publish();
        focus(&mut app, PublishField::Kind);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.draft.kind, AppKind::CodeSnippet);
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.draft.kind, AppKind::Script);
    }

    #[test]
    fn test_tags_entry() {
        let mut app = on_publish();
        focus(&mut app, PublishField::Tags);
        for tag in ["工具", "工具", "效率"] {
            type_text(&mut app, tag);
            app.handle_key(key(KeyCode::Enter));
        }
        assert_eq!(app.draft.tags(), ["工具", "效率"]);

        // Backspace on an empty input drops the last tag
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.draft.tags(), ["工具"]);
    }

    #[test]
    fn test_publish_success_goes_home() {
        let mut app = on_publish();
        type_text(&mut app, "像素时钟");
        focus(&mut app, PublishField::Description);
        type_text(&mut app, "复古时钟");
        focus(&mut app, PublishField::Url);
        type_text(&mut app, "https://clock.example.com");
        focus(&mut app, PublishField::Submit);
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.page(), Page::Home);
        assert_eq!(app.notice.as_ref().unwrap().text, PUBLISHED_NOTICE);
        let latest = yongyong_core::catalog::visible_catalog(app.catalog.apps(), HomeTab::Latest);
        assert_eq!(latest[0].title, "像素时钟");
        assert_eq!(latest[0].author.id, "1");
    }

    #[test]
    fn test_escape_discards_draft() {
        let mut app = on_publish();
        type_text(&mut app, "草稿");
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.page(), Page::Home);

        app.handle_key(key(KeyCode::Char('3')));
        assert!(app.draft.title.is_empty());
    }
}

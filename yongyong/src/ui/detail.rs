use yongyong_core::format::format_relative_time;
use yongyong_core::Comment;

use super::*;

pub(super) fn render_detail(
    frame: &mut Frame,
    app: &App,
    selected: &CatalogApp,
    layout: LayoutMode,
    area: Rect,
) {
    let editing = app.comment_input.is_some();

    let (info_area, comments_area) = match layout {
        LayoutMode::Wide => {
            let chunks =
                Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(area);
            (chunks[0], chunks[1])
        }
        LayoutMode::Compact => {
            let chunks =
                Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(area);
            (chunks[0], chunks[1])
        }
    };

    render_info(frame, app, selected, info_area);

    let (comments_area, input_area) = if editing {
        let chunks =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(comments_area);
        (chunks[0], Some(chunks[1]))
    } else {
        (comments_area, None)
    };

    let comments = app.detail.as_ref().map(|d| d.comments()).unwrap_or_default();
    render_comments(frame, comments, comments_area);

    if let (Some(input_area), Some(input)) = (input_area, app.comment_input.as_deref()) {
        let block = card(" 写评论 ").border_style(Style::default().fg(ACCENT));
        frame.render_widget(
            Paragraph::new(input_line(input, true)).block(block),
            input_area,
        );
    }
}

/// Title, author, stats, description and the link or snippet.
fn render_info(frame: &mut Frame, app: &App, selected: &CatalogApp, area: Rect) {
    let liked = app.detail.as_ref().is_some_and(|d| d.is_liked());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(selected.title.as_str(), Style::default().fg(BRAND).bold()),
            Span::raw(" "),
            kind_badge(selected.kind),
        ]),
        Line::from(vec![
            Span::raw(selected.author.name.as_str()),
            Span::styled(
                format!(" {}", selected.author.handle()),
                Style::default().fg(DIM),
            ),
        ]),
        app_stats_line(selected, liked),
        Line::default(),
        Line::from(selected.description.as_str()),
        Line::default(),
    ];
    if !selected.tags.is_empty() {
        lines.push(tags_line(&selected.tags));
    }
    if let Some(url) = &selected.url {
        lines.push(label_value("链接", url.clone()));
    }
    if let Some(code) = &selected.code_snippet {
        lines.push(Line::from(Span::styled("代码", Style::default().fg(LABEL_COLOR))));
        lines.extend(
            code.lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(DIM)))),
        );
    }

    let para = Paragraph::new(lines)
        .block(card(" 应用详情 "))
        .wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}

fn render_comments(frame: &mut Frame, comments: &[Comment], area: Rect) {
    let now = chrono::Utc::now();
    let mut lines = Vec::with_capacity(comments.len() * 3);
    for comment in comments {
        lines.push(Line::from(vec![
            Span::styled(comment.author.name.as_str(), Style::default().bold()),
            Span::styled(
                format!(" · {}", format_relative_time(comment.created_at, now)),
                Style::default().fg(DIM),
            ),
            Span::styled(format!("  ♥ {}", comment.likes), Style::default().fg(LIKE_COLOR)),
        ]));
        lines.push(Line::from(comment.content.as_str()));
        lines.push(Line::default());
    }

    let title = format!(" 评论 · {} ", comments.len());
    let para = Paragraph::new(lines)
        .block(card(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{key, test_app, type_text};
    use crate::ui::tests::render_app;
    use crossterm::event::KeyCode;

    #[test]
    fn test_detail_shows_app_and_comments() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        let screen = render_app(&mut app, 140, 30);
        assert!(screen.contains("番茄钟工具"));
        assert!(screen.contains("评论 · 2"));
        assert!(screen.contains("张三"));
    }

    #[test]
    fn test_like_marker_follows_toggle() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        assert!(render_app(&mut app, 80, 30).contains("♡ 328"));
        app.handle_key(key(KeyCode::Char('l')));
        assert!(render_app(&mut app, 80, 30).contains("♥ 329"));
    }

    #[test]
    fn test_comment_box_while_editing() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('c')));
        type_text(&mut app, "不错");
        let screen = render_app(&mut app, 80, 40);
        assert!(screen.contains("写评论"));
        assert!(screen.contains("不错"));
    }
}

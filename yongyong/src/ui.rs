//! UI rendering for the TUI.

mod chat;
mod community;
mod detail;
mod home;
mod profile;
mod publish;
mod ranking;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use yongyong_core::format::{format_count, format_date};
use yongyong_core::{AppKind, CatalogApp, Page, View};

use crate::app::{App, LayoutMode, NoticeKind};

// ========== Colors ==========

/// Brand orange for the logo and active tabs
const BRAND: Color = Color::Rgb(255, 122, 69);
/// Accent for selections and key hints
const ACCENT: Color = Color::Rgb(0, 180, 180);
/// Card borders
const BORDER_CARD: Color = Color::Rgb(90, 90, 90);
/// Labels in metadata blocks
const LABEL_COLOR: Color = Color::Rgb(100, 180, 180);
/// Like hearts
const LIKE_COLOR: Color = Color::Rgb(240, 80, 110);
/// Secondary text
const DIM: Color = Color::Rgb(128, 128, 128);
/// Rank #1
const GOLD: Color = Color::Rgb(255, 215, 0);
/// Rank #2
const SILVER: Color = Color::Rgb(192, 192, 192);
/// Rank #3
const BRONZE: Color = Color::Rgb(205, 127, 50);

/// Render the application UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let layout = app.layout_mode(area.width);

    // Layout: header, page body, status line, bottom nav, key hints
    let chunks = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Min(5),    // Page
        Constraint::Length(1), // Status
        Constraint::Length(1), // Bottom nav
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    let page = match app.navigator.resolve(&app.catalog) {
        View::Home(tab) => {
            home::render_home(frame, app, tab, layout, chunks[1]);
            Page::Home
        }
        View::Ranking => {
            ranking::render_ranking(frame, app, layout, chunks[1]);
            Page::Ranking
        }
        View::Community => {
            community::render_community(frame, app, layout, chunks[1]);
            Page::Community
        }
        View::Detail(selected) => {
            let selected = selected.clone();
            detail::render_detail(frame, app, &selected, layout, chunks[1]);
            Page::Detail
        }
        View::Profile(user) => {
            let user = user.clone();
            profile::render_profile(frame, app, &user, layout, chunks[1]);
            Page::Profile
        }
        View::AgentChat(creator) => {
            let creator = creator.clone();
            chat::render_chat(frame, app, &creator, layout, chunks[1]);
            Page::AgentChat
        }
        View::Publish => {
            publish::render_publish(frame, app, layout, chunks[1]);
            Page::Publish
        }
    };

    render_header(frame, page, chunks[0]);
    render_status_line(frame, app, chunks[2]);
    render_nav_bar(frame, page, chunks[3]);
    render_footer(frame, key_hints(app, page), chunks[4]);
}

/// Render the top bar: logo and the current page.
fn render_header(frame: &mut Frame, page: Page, area: Rect) {
    let header = Line::from(vec![
        Span::styled(" 用用 ", Style::default().fg(Color::Black).bg(BRAND).bold()),
        Span::raw("  "),
        Span::styled(page.label(), Style::default().fg(BRAND).bold()),
    ]);
    let para = Paragraph::new(header).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(BORDER_CARD)),
    );
    frame.render_widget(para, area);
}

/// Render the notice, if any.
fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };
    let style = match notice.kind {
        NoticeKind::Info => Style::default().fg(Color::Green).bold(),
        NoticeKind::Error => Style::default().fg(Color::Red).bold(),
    };
    let line = Line::from(vec![Span::raw(" "), Span::styled(notice.text.as_str(), style)]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the bottom navigation bar with number shortcuts.
fn render_nav_bar(frame: &mut Frame, active: Page, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, page) in Page::NAV_BAR.iter().enumerate() {
        let style = if *page == active {
            Style::default()
                .fg(BRAND)
                .bold()
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(DIM)
        };
        spans.push(Span::styled((i + 1).to_string(), Style::default().fg(ACCENT)));
        spans.push(Span::styled(format!(" {} ", page.label()), style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a row of `key label` hints.
fn render_footer(frame: &mut Frame, hints: &[(&str, &str)], area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(format!(" {}  ", label), Style::default().fg(DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(app: &App, page: Page) -> &'static [(&'static str, &'static str)] {
    match page {
        Page::Home => &[
            ("Tab", "切换"),
            ("j/k", "选择"),
            ("Enter", "查看"),
            ("h/l", "精选"),
            ("f", "打开精选"),
            ("a", "作者"),
            ("q", "退出"),
        ],
        Page::Ranking => &[
            ("Tab", "榜单"),
            ("j/k", "选择"),
            ("Enter", "查看"),
            ("Esc", "首页"),
        ],
        Page::Community => &[
            ("Tab", "分类"),
            ("j/k", "选择"),
            ("Enter", "作者"),
            ("Esc", "首页"),
        ],
        Page::Detail if app.comment_input.is_some() => &[("Enter", "发送"), ("Esc", "取消")],
        Page::Detail => &[
            ("l", "点赞"),
            ("s", "分享"),
            ("c", "评论"),
            ("a", "作者"),
            ("Esc", "首页"),
        ],
        Page::Profile => &[
            ("j/k", "选择"),
            ("Enter", "查看"),
            ("m", "AI助手"),
            ("Esc", "首页"),
        ],
        Page::AgentChat => &[("Enter", "发送"), ("Esc", "返回")],
        Page::Publish => &[
            ("Tab", "下一项"),
            ("←/→", "类型"),
            ("Ctrl+S", "发布"),
            ("Esc", "取消"),
        ],
    }
}

// ========== Shared widgets ==========

/// Rounded card with a title.
fn card<'a>(title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_CARD))
        .title(title)
}

/// Split a body area into a main pane and a side pane in wide layout.
fn split_wide(area: Rect, layout: LayoutMode, main_pct: u16) -> (Rect, Option<Rect>) {
    match layout {
        LayoutMode::Compact => (area, None),
        LayoutMode::Wide => {
            let chunks = Layout::horizontal([
                Constraint::Percentage(main_pct),
                Constraint::Percentage(100 - main_pct),
            ])
            .split(area);
            (chunks[0], Some(chunks[1]))
        }
    }
}

/// A one-line row of options with the active one highlighted.
fn option_bar<'a>(labels: impl IntoIterator<Item = (&'a str, bool)>) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (label, active) in labels {
        let style = if active {
            Style::default()
                .fg(BRAND)
                .bold()
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(DIM)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Highlighted table with the house style.
fn styled_table<'a>(
    rows: Vec<Row<'a>>,
    widths: Vec<Constraint>,
    header: Row<'a>,
    title: String,
) -> Table<'a> {
    Table::new(rows, widths)
        .header(header)
        .block(card(format!(" {} ", title)))
        .row_highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .fg(ACCENT),
        )
        .highlight_symbol("▶ ")
}

fn header_row<'a>(cells: &[&'a str]) -> Row<'a> {
    Row::new(
        cells
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow).bold())),
    )
}

/// Likes, views and comments of an app.
fn app_stats_line(app: &CatalogApp, liked: bool) -> Line<'static> {
    let heart = if liked { "♥" } else { "♡" };
    let dim = Style::default().fg(DIM);
    Line::from(vec![
        Span::styled(
            format!("{} {}", heart, format_count(app.likes)),
            Style::default().fg(LIKE_COLOR),
        ),
        Span::raw("   "),
        Span::styled(format!("浏览 {}", format_count(app.views)), dim),
        Span::raw("   "),
        Span::styled(format!("评论 {}", format_count(app.comments)), dim),
        Span::raw("   "),
        Span::styled(format_date(app.created_at), dim),
    ])
}

fn kind_badge(kind: AppKind) -> Span<'static> {
    let color = match kind {
        AppKind::ExternalLink => Color::Rgb(0, 180, 180),
        AppKind::CodeSnippet => Color::Rgb(220, 180, 0),
        AppKind::Package => Color::Rgb(150, 120, 220),
        AppKind::Script => Color::Rgb(80, 160, 80),
    };
    Span::styled(format!("[{}]", kind.label()), Style::default().fg(color))
}

fn tags_line(tags: &[String]) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for tag in tags {
        spans.push(Span::styled(format!("#{}", tag), Style::default().fg(ACCENT)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn label_value(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(LABEL_COLOR)),
        Span::raw(value),
    ])
}

/// Truncate to at most `max_width` terminal columns, adding `…` when cut.
fn truncate_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Hard-wrap text to `width` columns, keeping explicit newlines.
fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.lines() {
        let mut current = String::new();
        let mut used = 0;
        for ch in raw.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(ch);
            used += w;
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Text input line with a caret.
fn input_line<'a>(text: &'a str, focused: bool) -> Line<'a> {
    let mut spans = vec![Span::raw(text)];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    Line::from(spans)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::app::tests::{key, test_app};
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    pub(crate) fn render_app(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    /// Flatten a buffer, skipping the cells hidden behind wide characters.
    fn buffer_to_string(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut result = String::new();
        for y in 0..area.height {
            let mut x = 0;
            while x < area.width {
                let symbol = buffer[(x, y)].symbol();
                result.push_str(symbol);
                x += symbol.width().max(1) as u16;
            }
            result.push('\n');
        }
        result
    }

    #[test]
    fn test_truncate_width_counts_columns() {
        assert_eq!(truncate_width("番茄钟工具", 20), "番茄钟工具");
        assert_eq!(truncate_width("番茄钟工具", 7), "番茄钟…");
        assert_eq!(truncate_width("abcdef", 4), "abc…");
    }

    #[test]
    fn test_wrap_to_width() {
        assert_eq!(wrap_to_width("你好世界", 4), vec!["你好", "世界"]);
        assert_eq!(wrap_to_width("ab\ncd", 10), vec!["ab", "cd"]);
        assert_eq!(wrap_to_width("", 10), vec![""]);
    }

    #[test]
    fn test_home_renders_tabs_and_apps() {
        let mut app = test_app();
        let screen = render_app(&mut app, 80, 30);
        assert!(screen.contains("用用"));
        assert!(screen.contains("为你推荐"));
        assert!(screen.contains("番茄钟工具"));
        assert!(screen.contains("首页"));
    }

    #[test]
    fn test_wide_home_shows_preview() {
        let mut app = test_app();
        let screen = render_app(&mut app, 140, 30);
        assert!(screen.contains("李明"));
        assert!(screen.contains("浏览"));
    }

    #[test]
    fn test_every_page_renders() {
        let mut app = test_app();
        for c in ['2', '3', '4', '5'] {
            app.handle_key(key(KeyCode::Esc));
            app.handle_key(key(KeyCode::Char(c)));
            for width in [60, 140] {
                let screen = render_app(&mut app, width, 30);
                assert!(screen.contains(app.page().label()), "{:?} at {}", app.page(), width);
            }
        }
    }

    #[test]
    fn test_notice_is_rendered() {
        let mut app = test_app();
        app.show_notice("链接已复制到剪贴板！", NoticeKind::Info);
        let screen = render_app(&mut app, 80, 20);
        assert!(screen.contains("链接已复制到剪贴板！"));
    }
}

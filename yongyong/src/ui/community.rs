use yongyong_core::catalog::{filter_discussions, DiscussionFilter};
use yongyong_core::format::format_relative_time;

use super::*;

pub(super) fn render_community(frame: &mut Frame, app: &mut App, layout: LayoutMode, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Categories
        Constraint::Min(3),    // Posts
    ])
    .split(area);

    let filter = app.community_filter;
    let bar = option_bar(DiscussionFilter::ALL.iter().map(|f| (f.label(), *f == filter)));
    frame.render_widget(Paragraph::new(bar), chunks[0]);

    let posts = filter_discussions(app.catalog.discussions(), filter);
    let now = chrono::Utc::now();

    let header = header_row(&["分类", "标题", "作者", "回复"]);
    let widths = vec![
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Length(6),
    ];
    let rows: Vec<Row> = posts
        .iter()
        .map(|post| {
            Row::new(vec![
                Cell::from(post.category.label()).style(Style::default().fg(LABEL_COLOR)),
                Cell::from(post.title.as_str()),
                Cell::from(post.author.name.as_str()),
                Cell::from(post.replies.to_string()).style(Style::default().fg(DIM)),
            ])
        })
        .collect();

    let (list_area, side) = split_wide(chunks[1], layout, 55);
    let title = format!("讨论 · {}", posts.len());
    frame.render_stateful_widget(
        styled_table(rows, widths, header, title),
        list_area,
        &mut app.community_table,
    );

    let Some(side) = side else {
        return;
    };
    let block = card(" 帖子 ");
    let Some(post) = app.community_table.selected().and_then(|i| posts.get(i)) else {
        frame.render_widget(block, side);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(post.title.as_str(), Style::default().fg(BRAND).bold())),
        Line::from(vec![
            Span::raw(post.author.name.as_str()),
            Span::styled(
                format!(" · {}", format_relative_time(post.created_at, now)),
                Style::default().fg(DIM),
            ),
        ]),
        Line::default(),
        Line::from(post.content.as_str()),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "♥ {}   回复 {}   浏览 {}",
                format_count(post.likes),
                post.replies,
                format_count(post.views)
            ),
            Style::default().fg(DIM),
        )),
    ];
    if !post.tags.is_empty() {
        lines.push(tags_line(&post.tags));
    }
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        side,
    );
}

use yongyong_core::HomeTab;

use super::*;

/// Rows the featured carousel takes, border included.
const CAROUSEL_HEIGHT: u16 = 4;

pub(super) fn render_home(
    frame: &mut Frame,
    app: &mut App,
    tab: HomeTab,
    layout: LayoutMode,
    area: Rect,
) {
    let has_featured = !app.catalog.featured().is_empty();
    let carousel_height = if has_featured { CAROUSEL_HEIGHT } else { 0 };

    // Layout: tab bar, featured carousel, app list
    let chunks = Layout::vertical([
        Constraint::Length(1),               // Tabs
        Constraint::Length(carousel_height), // Carousel
        Constraint::Min(3),                  // Apps
    ])
    .split(area);

    let tabs = option_bar(HomeTab::TABS.iter().map(|t| (t.label(), *t == tab)));
    frame.render_widget(Paragraph::new(tabs), chunks[0]);

    if has_featured {
        render_carousel(frame, app, chunks[1]);
    }

    let (list_area, side) = split_wide(chunks[2], layout, 60);
    render_app_table(frame, app, tab, layout, list_area);
    if let Some(side) = side {
        render_preview(frame, app, side);
    }
}

/// The current featured slide with its position.
fn render_carousel(frame: &mut Frame, app: &App, area: Rect) {
    let featured = app.catalog.featured();
    let Some(idx) = app.carousel.current(featured.len()) else {
        return;
    };
    let slide = featured[idx];
    let inner_width = area.width.saturating_sub(4) as usize;

    let lines = vec![
        Line::from(vec![
            Span::styled(slide.title.as_str(), Style::default().fg(BRAND).bold()),
            Span::raw("  "),
            Span::styled(slide.author.name.as_str(), Style::default().fg(DIM)),
        ]),
        Line::from(truncate_width(&slide.description, inner_width)),
    ];

    let dots: String = (0..featured.len())
        .map(|i| if i == idx { '●' } else { '○' })
        .collect();
    let block = card(Line::from(vec![
        Span::styled(" 精选 ", Style::default().fg(GOLD).bold()),
        Span::styled(format!("{} ", dots), Style::default().fg(DIM)),
    ]));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_app_table(
    frame: &mut Frame,
    app: &mut App,
    tab: HomeTab,
    layout: LayoutMode,
    area: Rect,
) {
    let visible = app.navigator.visible_catalog(&app.catalog);

    let (header, widths) = match layout {
        LayoutMode::Compact => (
            header_row(&["应用", "作者", "点赞"]),
            vec![
                Constraint::Fill(1),
                Constraint::Length(8),
                Constraint::Length(6),
            ],
        ),
        LayoutMode::Wide => (
            header_row(&["应用", "类型", "作者", "点赞", "浏览"]),
            vec![
                Constraint::Fill(1),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(6),
                Constraint::Length(6),
            ],
        ),
    };

    let rows: Vec<Row> = visible
        .iter()
        .map(|entry| {
            let likes =
                Cell::from(format_count(entry.likes)).style(Style::default().fg(LIKE_COLOR));
            match layout {
                LayoutMode::Compact => Row::new(vec![
                    Cell::from(entry.title.as_str()),
                    Cell::from(entry.author.name.as_str()),
                    likes,
                ]),
                LayoutMode::Wide => Row::new(vec![
                    Cell::from(entry.title.as_str()),
                    Cell::from(Line::from(kind_badge(entry.kind))),
                    Cell::from(entry.author.name.as_str()),
                    likes,
                    Cell::from(format_count(entry.views)).style(Style::default().fg(DIM)),
                ]),
            }
        })
        .collect();

    let title = format!("{} · {}", tab.label(), visible.len());
    let table = styled_table(rows, widths, header, title);
    frame.render_stateful_widget(table, area, &mut app.home_table);
}

/// Side panel describing the highlighted app.
fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let block = card(" 简介 ");
    let Some(selected) = app.selected_home_app().and_then(|id| app.catalog.app(&id)) else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            selected.title.as_str(),
            Style::default().fg(BRAND).bold(),
        )),
        Line::from(vec![
            kind_badge(selected.kind),
            Span::raw(" "),
            Span::raw(selected.author.name.as_str()),
            Span::styled(
                format!(" {}", selected.author.handle()),
                Style::default().fg(DIM),
            ),
        ]),
        Line::default(),
        Line::from(selected.description.as_str()),
        Line::default(),
        app_stats_line(selected, false),
    ];
    if !selected.tags.is_empty() {
        lines.push(tags_line(&selected.tags));
    }

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}

use yongyong_core::User;

use super::*;

pub(super) fn render_profile(
    frame: &mut Frame,
    app: &mut App,
    user: &User,
    layout: LayoutMode,
    area: Rect,
) {
    let apps = app.catalog.apps_by(&user.id);
    let total_likes: u64 = apps.iter().map(|a| a.likes).sum();
    let is_self = user.id == app.catalog.current_user().id;

    let mut card_lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", user.initial()),
                Style::default().fg(Color::Black).bg(ACCENT).bold(),
            ),
            Span::raw(" "),
            Span::styled(user.name.as_str(), Style::default().fg(BRAND).bold()),
            Span::styled(format!(" {}", user.handle()), Style::default().fg(DIM)),
        ]),
        Line::from(Span::styled(
            format!("作品 {}   获赞 {}", apps.len(), format_count(total_likes)),
            Style::default().fg(DIM),
        )),
    ];
    if let Some(bio) = &user.bio {
        card_lines.push(Line::default());
        card_lines.push(Line::from(bio.as_str()));
    }
    if !is_self {
        card_lines.push(Line::default());
        card_lines.push(Line::from(vec![
            Span::styled("m", Style::default().fg(Color::Yellow)),
            Span::raw(" 和TA的AI助手聊聊"),
        ]));
    }

    let (card_area, list_area) = match layout {
        LayoutMode::Wide => {
            let chunks =
                Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                    .split(area);
            (chunks[0], chunks[1])
        }
        LayoutMode::Compact => {
            let height = card_lines.len() as u16 + 2;
            let chunks =
                Layout::vertical([Constraint::Length(height), Constraint::Min(3)]).split(area);
            (chunks[0], chunks[1])
        }
    };

    frame.render_widget(
        Paragraph::new(card_lines)
            .block(card(" 主页 "))
            .wrap(Wrap { trim: false }),
        card_area,
    );

    let header = header_row(&["作品", "点赞", "发布"]);
    let widths = vec![
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Length(10),
    ];
    let rows: Vec<Row> = apps
        .iter()
        .map(|a| {
            Row::new(vec![
                Cell::from(a.title.as_str()),
                Cell::from(format_count(a.likes)).style(Style::default().fg(LIKE_COLOR)),
                Cell::from(format_date(a.created_at)).style(Style::default().fg(DIM)),
            ])
        })
        .collect();
    let title = if is_self {
        "我的作品".to_string()
    } else {
        format!("{}的作品", user.name)
    };
    frame.render_stateful_widget(
        styled_table(rows, widths, header, title),
        list_area,
        &mut app.profile_table,
    );
}

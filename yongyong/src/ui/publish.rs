use yongyong_core::publish::MAX_TAGS;

use crate::app::PublishField;

use super::*;

pub(super) fn render_publish(frame: &mut Frame, app: &App, layout: LayoutMode, area: Rect) {
    let (form_area, side) = split_wide(area, layout, 65);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(3), // Description
        Constraint::Length(3), // Kind
        Constraint::Length(3), // Url
        Constraint::Length(3), // Tags
        Constraint::Length(3), // Submit
        Constraint::Min(0),
    ])
    .split(form_area);

    let draft = &app.draft;
    let focus = app.publish_field;

    render_text_field(
        frame,
        "应用标题 *",
        &draft.title,
        focus == PublishField::Title,
        chunks[0],
    );
    render_text_field(
        frame,
        "应用描述 *",
        &draft.description,
        focus == PublishField::Description,
        chunks[1],
    );

    let kinds = option_bar(AppKind::ALL.iter().map(|k| (k.label(), *k == draft.kind)));
    frame.render_widget(
        Paragraph::new(kinds).block(field_block("作品类型", focus == PublishField::Kind)),
        chunks[2],
    );

    let url_label = if draft.kind == AppKind::ExternalLink {
        "应用链接 *"
    } else {
        "应用链接"
    };
    render_text_field(frame, url_label, &draft.url, focus == PublishField::Url, chunks[3]);

    let tags_focused = focus == PublishField::Tags;
    let mut tag_spans: Vec<Span> = tags_line(draft.tags()).spans;
    if draft.can_add_tag() {
        tag_spans.extend(input_line(&app.tag_input, tags_focused).spans);
    }
    let tags_title = format!("标签 {}/{}", draft.tags().len(), MAX_TAGS);
    frame.render_widget(
        Paragraph::new(Line::from(tag_spans)).block(field_block(&tags_title, tags_focused)),
        chunks[4],
    );

    let submit_style = if focus == PublishField::Submit {
        Style::default().fg(Color::Black).bg(BRAND).bold()
    } else {
        Style::default().fg(BRAND).bold()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" 发布作品 ", submit_style)))
            .block(field_block("", focus == PublishField::Submit)),
        chunks[5],
    );

    if let Some(side) = side {
        let lines = vec![
            Line::from(Span::styled("发布须知", Style::default().fg(BRAND).bold())),
            Line::default(),
            Line::from("· 标题和描述必填"),
            Line::from("· 在线应用需要填写链接"),
            Line::from(format!("· 最多 {} 个标签，回车添加", MAX_TAGS)),
            Line::from("· 发布后会出现在最新发布中"),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .block(card(" 提示 "))
                .wrap(Wrap { trim: false }),
            side,
        );
    }
}

fn field_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { BORDER_CARD };
    card(format!(" {} ", title)).border_style(Style::default().fg(border))
}

fn render_text_field(frame: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let inner_width = area.width.saturating_sub(3) as usize;
    let shown = truncate_width(value, inner_width);
    frame.render_widget(
        Paragraph::new(input_line(&shown, focused)).block(field_block(title, focused)),
        area,
    );
}

use yongyong_core::format::format_message_time;
use yongyong_core::{ChatSession, Sender, User};

use super::*;

/// Composing indicator shown while a reply is pending.
const TYPING_INDICATOR: &str = "正在输入…";

pub(super) fn render_chat(
    frame: &mut Frame,
    app: &App,
    creator: &User,
    layout: LayoutMode,
    area: Rect,
) {
    let profile = app.persona().profile();

    let (persona_area, chat_area) = match layout {
        LayoutMode::Wide => {
            let chunks =
                Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
                    .split(area);
            (chunks[0], chunks[1])
        }
        LayoutMode::Compact => {
            let chunks =
                Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);
            (chunks[0], chunks[1])
        }
    };

    // Persona card: full in wide layout, one line in compact
    let persona_lines = match layout {
        LayoutMode::Wide => {
            let mut lines = vec![
                Line::from(Span::styled(profile.name, Style::default().fg(BRAND).bold())),
                Line::from(Span::styled(
                    format!("代表 {}", creator.name),
                    Style::default().fg(DIM),
                )),
                Line::default(),
                label_value("性格", profile.personality.to_string()),
                Line::default(),
                Line::from(Span::styled("了解", Style::default().fg(LABEL_COLOR))),
            ];
            lines.extend(profile.knowledge.iter().map(|k| Line::from(format!("· {}", k))));
            lines.push(Line::default());
            lines.push(label_value("联系方式", profile.contact_rules.to_string()));
            lines
        }
        LayoutMode::Compact => vec![Line::from(vec![
            Span::styled(profile.name, Style::default().fg(BRAND).bold()),
            Span::styled(format!(" · 代表 {}", creator.name), Style::default().fg(DIM)),
        ])],
    };
    frame.render_widget(
        Paragraph::new(persona_lines)
            .block(card(" AI助手 "))
            .wrap(Wrap { trim: false }),
        persona_area,
    );

    let chunks = Layout::vertical([
        Constraint::Min(3),    // Messages
        Constraint::Length(3), // Input
    ])
    .split(chat_area);

    if let Some(chat) = &app.chat {
        render_messages(frame, chat, profile.name, chunks[0]);
    }

    let composing = app.chat.as_ref().is_some_and(|c| c.is_composing());
    let input_title = if composing { " 等待回复… " } else { " 输入消息 " };
    let block = card(input_title).border_style(Style::default().fg(ACCENT));
    frame.render_widget(
        Paragraph::new(input_line(&app.chat_input, true)).block(block),
        chunks[1],
    );
}

/// Message history, scrolled so the newest line is visible.
fn render_messages(frame: &mut Frame, chat: &ChatSession, agent_name: &str, area: Rect) {
    let text_width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for msg in chat.messages() {
        let (who, color) = match msg.sender {
            Sender::User => ("我", ACCENT),
            Sender::Agent => (agent_name, BRAND),
        };
        lines.push(Line::from(vec![
            Span::styled(who.to_string(), Style::default().fg(color).bold()),
            Span::styled(
                format!(" {}", format_message_time(msg.timestamp)),
                Style::default().fg(DIM),
            ),
        ]));
        lines.extend(
            wrap_to_width(&msg.text, text_width)
                .into_iter()
                .map(|l| Line::from(format!(" {}", l))),
        );
        lines.push(Line::default());
    }
    if chat.is_composing() {
        lines.push(Line::from(Span::styled(
            format!("{} {}", agent_name, TYPING_INDICATOR),
            Style::default().fg(DIM).add_modifier(Modifier::ITALIC),
        )));
    }

    let visible = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    let title = format!(" 与 {} 的对话 ", chat.creator().name);
    frame.render_widget(Paragraph::new(lines).block(card(title)), area);
}

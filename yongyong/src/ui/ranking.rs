use yongyong_core::catalog::{ranking, RankingBoard};

use super::*;

pub(super) fn render_ranking(frame: &mut Frame, app: &mut App, layout: LayoutMode, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Boards
        Constraint::Min(3),    // Entries
    ])
    .split(area);

    let board = app.ranking_board;
    let boards = option_bar(RankingBoard::ALL.iter().map(|b| (b.label(), *b == board)));
    frame.render_widget(Paragraph::new(boards), chunks[0]);

    let entries = ranking(app.catalog.apps(), board);
    let metric = match board {
        RankingBoard::Hot => "点赞",
        RankingBoard::Views => "浏览",
        RankingBoard::Newest => "发布",
    };

    let (header, widths) = match layout {
        LayoutMode::Compact => (
            header_row(&["#", "应用", metric]),
            vec![
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(10),
            ],
        ),
        LayoutMode::Wide => (
            header_row(&["#", "应用", "类型", "作者", metric]),
            vec![
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(10),
            ],
        ),
    };

    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            let rank = Cell::from(entry.rank.to_string()).style(rank_style(entry.rank));
            let value = match board {
                RankingBoard::Hot => Cell::from(format!("♥ {}", format_count(entry.app.likes)))
                    .style(Style::default().fg(LIKE_COLOR)),
                RankingBoard::Views => Cell::from(format_count(entry.app.views)),
                RankingBoard::Newest => {
                    Cell::from(format_date(entry.app.created_at)).style(Style::default().fg(DIM))
                }
            };
            match layout {
                LayoutMode::Compact => {
                    Row::new(vec![rank, Cell::from(entry.app.title.as_str()), value])
                }
                LayoutMode::Wide => Row::new(vec![
                    rank,
                    Cell::from(entry.app.title.as_str()),
                    Cell::from(Line::from(kind_badge(entry.app.kind))),
                    Cell::from(entry.app.author.name.as_str()),
                    value,
                ]),
            }
        })
        .collect();

    let title = format!("{} · TOP {}", board.label(), entries.len());
    let table = styled_table(rows, widths, header, title);
    frame.render_stateful_widget(table, chunks[1], &mut app.ranking_table);
}

/// Medal colors for the podium.
fn rank_style(rank: usize) -> Style {
    match rank {
        1 => Style::default().fg(GOLD).bold(),
        2 => Style::default().fg(SILVER).bold(),
        3 => Style::default().fg(BRONZE).bold(),
        _ => Style::default().fg(DIM),
    }
}

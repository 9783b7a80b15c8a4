use promptcraft_core::session::RECENT_LIMIT;
use promptcraft_core::Session;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Generation counter and the most recent entries, newest first.
pub fn render(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" Dashboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(lines(session))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

pub fn lines(session: &Session) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Total generations: "),
            Span::styled(
                session.total_generations().to_string(),
                Style::default().fg(Color::Magenta).bold(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Recent history", Style::default().bold())),
    ];

    if session.history().is_empty() {
        lines.push(Line::from(Span::styled(
            "No history yet",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for entry in session.recent(RECENT_LIMIT) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", entry.time_label()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(entry.preview.clone()),
        ]));
    }
    lines
}

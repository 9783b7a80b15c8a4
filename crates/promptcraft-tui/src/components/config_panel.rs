use promptcraft_core::{Choice, Session, QUICK_TEMPLATES};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const NEED_PLACEHOLDER: &str = "Example: I need a prompt to generate creative marketing copy \
                                for a new coffee shop targeting young professionals...";

/// Left-hand panel with the need and the generation options.
pub fn render(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" Prompt Configuration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(lines(session))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn lines(session: &Session) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("Describe your needs ", Style::default().bold()),
        Span::styled("[e]", Style::default().fg(Color::Yellow)),
    ])];
    if session.draft.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            NEED_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.extend(session.draft.lines().map(|l| Line::from(l.to_string())));
    }
    lines.push(Line::from(""));

    lines.push(option_line("p/P", "Purpose", session.purpose.as_str()));
    lines.push(option_line("t/T", "Tone", session.tone.as_str()));
    lines.push(option_line("c/C", "Complexity", session.complexity.as_str()));
    lines.push(option_line("a/A", "Audience", session.audience.as_str()));
    lines.push(Line::from(vec![
        Span::styled(" +/-  ", Style::default().fg(Color::Yellow)),
        Span::raw("Creativity: "),
        Span::styled(
            format!("{:.1} ", session.temperature),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(creativity_bar(session.temperature), Style::default().fg(Color::Cyan)),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Quick templates", Style::default().bold())));
    for (i, t) in QUICK_TEMPLATES.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::Yellow)),
            Span::raw(t.name),
        ]));
    }
    lines
}

fn option_line(keys: &'static str, name: &'static str, value: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {keys:<4} "), Style::default().fg(Color::Yellow)),
        Span::raw(format!("{name}: ")),
        Span::styled(value, Style::default().fg(Color::Cyan)),
    ])
}

/// Ten-cell bar, one cell per 0.1.
fn creativity_bar(t: f32) -> String {
    let filled = (t * 10.0).round().clamp(0.0, 10.0) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}

use crossterm::event::{KeyCode, KeyEvent};
use promptcraft_core::{sectionize, Choice, Purpose, SectionLabel};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::report::UNPARSED_NOTICE;

const EMPTY_HINT: &str = "Configure your prompt on the left and press g to generate.";

const EXAMPLE_OUTPUT: &[&str] = &[
    "DETECTED INTENT:",
    "Create engaging marketing content for a coffee shop targeting young professionals",
    "",
    "SUGGESTED PROMPT TYPE:",
    "Marketing copy generator with brand voice specification",
    "",
    "COPY-PASTEABLE PROMPT TEMPLATE:",
    "Act as a marketing copywriter specializing in food and beverage. Create {number} \
     engaging {content_type} for a coffee shop called {shop_name} that targets \
     {target_audience}. The tone should be {tone} and highlight these key features: \
     {key_features}. Include a call-to-action about {call_to_action}.",
    "",
    "USAGE TIPS:",
    "- Replace placeholders with your specific details",
    "- Adjust tone based on your brand voice",
    "- Specify the number of variations needed",
];

/// Right-hand panel showing the latest reply.
#[derive(Debug, Default)]
pub struct ResultView {
    scroll: u16,
}

impl ResultView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, response: Option<&str>, purpose: Purpose) {
        let block = Block::default()
            .title(" Generated Prompt ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new(result_lines(response, purpose))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

/// Lines shown in the result panel.
///
/// With no reply: a hint and the example format. With a reply: each non-empty
/// section under its title, the prompt type tagged with the chosen purpose.
/// A reply with no recognizable section falls back to the raw text.
pub fn result_lines(response: Option<&str>, purpose: Purpose) -> Vec<Line<'static>> {
    let Some(response) = response else {
        return placeholder_lines();
    };

    let sections = sectionize(response);
    if sections.is_empty() {
        let mut lines = vec![
            Line::from(Span::styled(
                UNPARSED_NOTICE,
                Style::default().fg(Color::Yellow).bold(),
            )),
            Line::from(""),
        ];
        lines.extend(
            response
                .lines()
                .map(|l| Line::from(Span::raw(l.to_string()))),
        );
        return lines;
    }

    let mut lines = Vec::new();
    for label in SectionLabel::ALL {
        let text = sections.trimmed(*label);
        if text.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            label.display_name(),
            section_style(*label),
        )));
        let body_style = if *label == SectionLabel::PromptTemplate {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        for l in text.lines() {
            lines.push(Line::from(Span::styled(l.to_string(), body_style)));
        }
        if *label == SectionLabel::SuggestedPromptType {
            lines.push(Line::from(Span::styled(
                format!("[{}]", purpose.as_str()),
                Style::default().fg(Color::Magenta),
            )));
        }
    }
    lines
}

fn placeholder_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(EMPTY_HINT, Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(Span::styled(
            "Example output format:",
            Style::default().bold(),
        )),
        Line::from(""),
    ];
    lines.extend(
        EXAMPLE_OUTPUT
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::DarkGray)))),
    );
    lines
}

fn section_style(label: SectionLabel) -> Style {
    let color = match label {
        SectionLabel::DetectedIntent => Color::LightBlue,
        SectionLabel::SuggestedPromptType => Color::Yellow,
        SectionLabel::PromptTemplate => Color::LightGreen,
        SectionLabel::UsageTips => Color::LightMagenta,
    };
    Style::default().fg(color).bold()
}

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use promptcraft_core::{Choice, Session, QUICK_TEMPLATES};
use promptcraft_service::{BlockingProvider, CompletionSettings, GenerateError};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use tracing::{error, info};

use crate::components::result_view::ResultView;
use crate::components::{config_panel, dashboard};

/// What the app is currently doing
#[derive(Debug, Clone)]
pub enum Mode {
    /// Main screen
    Normal,
    /// Typing the need
    EditNeed { input: String },
    /// A generation is queued; the event loop runs it after the next draw
    Generating,
    /// Quick template picker
    TemplatePick { list_state: ListState },
    /// Full history, newest first
    HistoryList { list_state: ListState },
    /// Read-only viewer for one history entry's reply
    ViewResponse { index: usize, scroll: u16 },
    /// Confirm clearing the history
    ConfirmClearHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One-line message shown in the status bar until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    fn style(&self) -> Style {
        match self.level {
            NoticeLevel::Info => Style::default().fg(Color::Cyan),
            NoticeLevel::Success => Style::default().fg(Color::Green),
            NoticeLevel::Warning => Style::default().fg(Color::Yellow),
            NoticeLevel::Error => Style::default().fg(Color::Red),
        }
    }
}

pub struct App {
    /// `None` when no API key is configured; generating then reports an error.
    provider: Option<BlockingProvider>,
    session: Session,
    mode: Mode,
    notice: Option<Notice>,
    result: ResultView,
}

impl App {
    pub fn new(provider: Option<BlockingProvider>, session: Session) -> Self {
        Self {
            provider,
            session,
            mode: Mode::Normal,
            notice: None,
            result: ResultView::new(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn result_scroll(&self) -> u16 {
        self.result.scroll()
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::EditNeed { .. })
    }

    /// True when the event loop should call [`App::run_generation`].
    pub fn is_generating(&self) -> bool {
        matches!(self.mode, Mode::Generating)
    }

    /// Apply a session transition.
    fn update_session(&mut self, f: impl FnOnce(Session) -> Session) {
        let session = std::mem::take(&mut self.session);
        self.session = f(session);
    }

    /// Run the queued generation. Blocks until the provider answers.
    pub fn run_generation(&mut self) {
        if !self.is_generating() {
            return;
        }
        self.mode = Mode::Normal;

        let Some(provider) = self.provider.as_ref() else {
            self.notice = Some(Notice::new(NoticeLevel::Error, missing_key_message()));
            return;
        };

        let request = self.session.request();
        let settings = CompletionSettings {
            temperature: self.session.temperature,
        };
        match provider.generate(&request, settings) {
            Ok(generation) => {
                info!(
                    "generation complete ({} bytes, sections found: {})",
                    generation.response.len(),
                    !generation.sections.is_empty()
                );
                let need = request.need.clone();
                self.update_session(|s| {
                    s.record_generation(&need, &generation.response, Utc::now())
                });
                self.result.reset();
                self.notice = Some(Notice::new(
                    NoticeLevel::Success,
                    "Prompt generated successfully!",
                ));
            }
            Err(GenerateError::Request(e)) => {
                self.notice = Some(Notice::new(NoticeLevel::Warning, e.to_string()));
            }
            Err(e) => {
                error!("generation failed: {e}");
                self.notice = Some(Notice::new(
                    NoticeLevel::Error,
                    format!(
                        "Generation failed: {e}. Please check your API key and internet connection."
                    ),
                ));
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.notice = None;

        match &self.mode.clone() {
            Mode::Normal => self.handle_normal(key),
            Mode::EditNeed { input } => self.handle_edit_need(key, input.clone()),
            // Keys pressed while a request is in flight are dropped.
            Mode::Generating => {}
            Mode::TemplatePick { list_state } => {
                self.handle_template_pick(key, list_state.clone())
            }
            Mode::HistoryList { list_state } => {
                self.handle_history_list(key, list_state.clone())
            }
            Mode::ViewResponse { index, scroll } => {
                self.handle_view_response(key, *index, *scroll)
            }
            Mode::ConfirmClearHistory => self.handle_confirm_clear(key),
        }
    }

    fn handle_normal(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('e') | KeyCode::Char('i') => {
                self.mode = Mode::EditNeed {
                    input: self.session.draft.clone(),
                };
            }
            KeyCode::Char('g') | KeyCode::Enter => self.request_generation(),
            KeyCode::Char('p') => self.session.purpose = self.session.purpose.next(),
            KeyCode::Char('P') => self.session.purpose = self.session.purpose.prev(),
            KeyCode::Char('t') => self.session.tone = self.session.tone.next(),
            KeyCode::Char('T') => self.session.tone = self.session.tone.prev(),
            KeyCode::Char('c') => self.session.complexity = self.session.complexity.next(),
            KeyCode::Char('C') => self.session.complexity = self.session.complexity.prev(),
            KeyCode::Char('a') => self.session.audience = self.session.audience.next(),
            KeyCode::Char('A') => self.session.audience = self.session.audience.prev(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.update_session(|s| s.adjust_temperature(1))
            }
            KeyCode::Char('-') => self.update_session(|s| s.adjust_temperature(-1)),
            KeyCode::Char('m') => {
                let mut list_state = ListState::default();
                list_state.select(Some(0));
                self.mode = Mode::TemplatePick { list_state };
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                self.apply_template(idx);
            }
            KeyCode::Char('h') => {
                let mut list_state = ListState::default();
                if !self.session.history().is_empty() {
                    list_state.select(Some(0));
                }
                self.mode = Mode::HistoryList { list_state };
            }
            KeyCode::Char('r') => {
                if self.session.last_response().is_some() {
                    self.update_session(Session::discard_result);
                    self.result.reset();
                    self.notice = Some(Notice::new(
                        NoticeLevel::Info,
                        "Result cleared. Adjust and press g to generate again",
                    ));
                }
            }
            KeyCode::Char('D') => {
                if !self.session.history().is_empty() {
                    self.mode = Mode::ConfirmClearHistory;
                }
            }
            _ => self.result.handle_key(key),
        }
    }

    /// Validate and queue a generation.
    fn request_generation(&mut self) {
        if self.session.draft.trim().is_empty() {
            self.notice = Some(Notice::new(
                NoticeLevel::Warning,
                "Please enter your requirements",
            ));
            return;
        }
        if self.provider.is_none() {
            self.notice = Some(Notice::new(NoticeLevel::Error, missing_key_message()));
            return;
        }
        self.mode = Mode::Generating;
    }

    fn apply_template(&mut self, idx: usize) {
        if let Some(template) = QUICK_TEMPLATES.get(idx) {
            self.update_session(|s| s.apply_template(template));
            self.notice = Some(Notice::new(
                NoticeLevel::Info,
                format!("Template loaded: {}", template.name),
            ));
        }
    }

    fn handle_edit_need(&mut self, key: KeyEvent, mut input: String) {
        match key.code {
            KeyCode::Enter => {
                self.session.draft = input;
                self.mode = Mode::Normal;
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                input.pop();
                self.mode = Mode::EditNeed { input };
            }
            KeyCode::Char(c) => {
                input.push(c);
                self.mode = Mode::EditNeed { input };
            }
            _ => {}
        }
    }

    fn handle_template_pick(&mut self, key: KeyEvent, mut list_state: ListState) {
        let count = QUICK_TEMPLATES.len();
        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Char('j') | KeyCode::Down => {
                let i = list_state.selected().unwrap_or(0);
                if i + 1 < count {
                    list_state.select(Some(i + 1));
                }
                self.mode = Mode::TemplatePick { list_state };
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let i = list_state.selected().unwrap_or(0);
                list_state.select(Some(i.saturating_sub(1)));
                self.mode = Mode::TemplatePick { list_state };
            }
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                if let Some(i) = list_state.selected() {
                    self.apply_template(i);
                }
            }
            _ => {}
        }
    }

    /// Map a row of the newest-first history list to a history index.
    fn history_index(&self, row: usize) -> Option<usize> {
        let len = self.session.history().len();
        (row < len).then(|| len - 1 - row)
    }

    fn handle_history_list(&mut self, key: KeyEvent, mut list_state: ListState) {
        let count = self.session.history().len();
        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(i) = list_state.selected() {
                    if i + 1 < count {
                        list_state.select(Some(i + 1));
                    }
                }
                self.mode = Mode::HistoryList { list_state };
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(i) = list_state.selected() {
                    list_state.select(Some(i.saturating_sub(1)));
                }
                self.mode = Mode::HistoryList { list_state };
            }
            KeyCode::Enter | KeyCode::Char('u') => {
                let Some(index) = list_state.selected().and_then(|r| self.history_index(r)) else {
                    return;
                };
                let session = std::mem::take(&mut self.session);
                match session.clone().reuse(index) {
                    Ok(s) => {
                        self.session = s;
                        self.result.reset();
                        self.notice = Some(Notice::new(
                            NoticeLevel::Info,
                            "Input restored from history",
                        ));
                        self.mode = Mode::Normal;
                    }
                    Err(e) => {
                        self.session = session;
                        self.notice = Some(Notice::new(NoticeLevel::Error, e.to_string()));
                    }
                }
            }
            KeyCode::Char('v') => {
                if let Some(index) = list_state.selected().and_then(|r| self.history_index(r)) {
                    self.mode = Mode::ViewResponse { index, scroll: 0 };
                }
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                if count > 0 {
                    self.mode = Mode::ConfirmClearHistory;
                }
            }
            _ => {}
        }
    }

    fn handle_view_response(&mut self, key: KeyEvent, index: usize, mut scroll: u16) {
        match key.code {
            KeyCode::Esc => {
                let len = self.session.history().len();
                let mut list_state = ListState::default();
                if index < len {
                    list_state.select(Some(len - 1 - index));
                }
                self.mode = Mode::HistoryList { list_state };
            }
            KeyCode::Char('j') | KeyCode::Down => {
                scroll = scroll.saturating_add(1);
                self.mode = Mode::ViewResponse { index, scroll };
            }
            KeyCode::Char('k') | KeyCode::Up => {
                scroll = scroll.saturating_sub(1);
                self.mode = Mode::ViewResponse { index, scroll };
            }
            _ => {}
        }
    }

    fn handle_confirm_clear(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('y') {
            self.update_session(Session::clear_history);
            self.result.reset();
            self.notice = Some(Notice::new(NoticeLevel::Info, "History cleared"));
        }
        self.mode = Mode::Normal;
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);
        self.render_body(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Overlays
        match &self.mode {
            Mode::Normal => {}
            Mode::EditNeed { input } => {
                self.render_input_bar(frame, "Describe your needs: ", input, area)
            }
            Mode::Generating => self.render_generating(frame, area),
            Mode::TemplatePick { list_state } => {
                self.render_template_pick(frame, list_state, area)
            }
            Mode::HistoryList { list_state } => {
                self.render_history_list(frame, list_state, area)
            }
            Mode::ViewResponse { index, scroll } => {
                let content = self
                    .session
                    .history()
                    .get(*index)
                    .map(|e| e.response.as_str())
                    .unwrap_or("(entry no longer available)");
                self.render_scrollable_text(frame, " Response ", content, *scroll, area)
            }
            Mode::ConfirmClearHistory => self.render_confirm_clear(frame, area),
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let model = self
            .provider
            .as_ref()
            .map(|p| p.model_hint().unwrap_or(p.name()).to_string())
            .unwrap_or_else(|| "no API key".into());
        let title = Line::from(vec![
            Span::styled(" promptcraft ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
            Span::styled("AI-Powered Prompt Engineering", Style::default().fg(Color::Yellow)),
            Span::styled(format!(" ({model})"), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(title, area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(10)])
            .split(columns[0]);

        config_panel::render(frame, left[0], &self.session);
        dashboard::render(frame, left[1], &self.session);
        self.result.render(
            frame,
            columns[1],
            self.session.last_response(),
            self.session.purpose,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref notice) = self.notice {
            let line = Line::from(Span::styled(format!(" {}", notice.text), notice.style()));
            frame.render_widget(line, area);
            return;
        }

        let hints = match &self.mode {
            Mode::Normal => vec![
                ("q", "quit"),
                ("e", "edit need"),
                ("g", "generate"),
                ("p/t/c/a", "options"),
                ("+/-", "creativity"),
                ("m/1-6", "templates"),
                ("j/k", "scroll"),
                ("r", "clear result"),
                ("h", "history"),
                ("D", "clear history"),
            ],
            Mode::EditNeed { .. } => vec![("Enter", "save"), ("Esc", "cancel")],
            Mode::Generating => vec![("", "Crafting your prompt...")],
            Mode::TemplatePick { .. } => {
                vec![("j/k", "nav"), ("Enter", "use"), ("Esc", "back")]
            }
            Mode::HistoryList { .. } => vec![
                ("j/k", "nav"),
                ("Enter", "reuse"),
                ("v", "view"),
                ("d", "clear"),
                ("Esc", "back"),
            ],
            Mode::ViewResponse { .. } => vec![("j/k", "scroll"), ("Esc", "back")],
            Mode::ConfirmClearHistory => vec![("y", "confirm"), ("any", "cancel")],
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(
                        format!(" {key}"),
                        Style::default().fg(Color::Yellow).bold(),
                    ),
                    Span::raw(format!(" {desc} ")),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }

    fn render_input_bar(&self, frame: &mut Frame, label: &str, input: &str, area: Rect) {
        let input_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(3),
            width: area.width,
            height: 3,
        };
        frame.render_widget(Clear, input_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(label);
        let paragraph = Paragraph::new(input).block(block);
        frame.render_widget(paragraph, input_area);
    }

    fn render_generating(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(40, 20, area);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Generating ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Crafting your prompt...",
                Style::default().fg(Color::Yellow).bold(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, popup);
    }

    fn render_template_pick(&self, frame: &mut Frame, list_state: &ListState, area: Rect) {
        let popup = centered_rect(50, 40, area);
        frame.render_widget(Clear, popup);

        let items: Vec<ListItem> = QUICK_TEMPLATES
            .iter()
            .map(|t| {
                ListItem::new(vec![
                    Line::from(Span::styled(t.name, Style::default().bold())),
                    Line::from(Span::styled(
                        format!("  {}", t.pattern),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Quick Templates ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));
        let mut state = list_state.clone();
        frame.render_stateful_widget(list, popup, &mut state);
    }

    fn render_history_list(&self, frame: &mut Frame, list_state: &ListState, area: Rect) {
        let popup = centered_rect(70, 70, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" History ({}) ", self.session.history().len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if self.session.history().is_empty() {
            let paragraph = Paragraph::new(Span::styled(
                "No history yet",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            frame.render_widget(paragraph, popup);
            return;
        }

        let items: Vec<ListItem> = self
            .session
            .history()
            .iter()
            .rev()
            .map(|e| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", e.time_label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(e.preview.as_str()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        let mut state = list_state.clone();
        frame.render_stateful_widget(list, popup, &mut state);
    }

    fn render_scrollable_text(
        &self,
        frame: &mut Frame,
        title: &str,
        content: &str,
        scroll: u16,
        area: Rect,
    ) {
        let popup = centered_rect(80, 80, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let paragraph = Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, popup);
    }

    fn render_confirm_clear(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(40, 20, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Clear History ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        let text = format!(
            "Delete {} entries and reset the counter? (y/n)",
            self.session.history().len()
        );
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup);
    }
}

fn missing_key_message() -> &'static str {
    "API key not configured. Set GOOGLE_API_KEY or add it to your .env file."
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

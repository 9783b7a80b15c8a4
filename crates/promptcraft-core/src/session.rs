//! State of one interactive session.
//!
//! Handlers take a [`Session`] by value and hand back the updated one; there
//! is no process-wide state. Nothing here is persisted.

use chrono::{DateTime, Utc};

use crate::error::PromptcraftError;
use crate::history::HistoryEntry;
use crate::options::{Audience, Complexity, Purpose, Tone};
use crate::request::GenerationRequest;
use crate::template::QuickTemplate;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const TEMPERATURE_STEP: f32 = 0.1;

/// Entries shown on the dashboard.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub draft: String,
    pub purpose: Purpose,
    pub tone: Tone,
    pub complexity: Complexity,
    pub audience: Audience,
    pub temperature: f32,
    history: Vec<HistoryEntry>,
    total_generations: u64,
    last_response: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            draft: String::new(),
            purpose: Purpose::default(),
            tone: Tone::default(),
            complexity: Complexity::default(),
            audience: Audience::default(),
            temperature: DEFAULT_TEMPERATURE,
            history: Vec::new(),
            total_generations: 0,
            last_response: None,
        }
    }
}

impl Session {
    pub fn with_temperature(self, temperature: f32) -> Self {
        Self {
            temperature: clamp_temperature(temperature),
            ..self
        }
    }

    /// The request the current draft and options describe.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            need: self.draft.clone(),
            purpose: self.purpose,
            tone: self.tone,
            complexity: self.complexity,
            audience: self.audience,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn total_generations(&self) -> u64 {
        self.total_generations
    }

    pub fn last_response(&self) -> Option<&str> {
        self.last_response.as_deref()
    }

    /// Up to `n` of the latest entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().rev().take(n)
    }

    /// Record a successful generation.
    pub fn record_generation(mut self, input: &str, response: &str, at: DateTime<Utc>) -> Self {
        self.history.push(HistoryEntry::new(input, response, at));
        self.total_generations += 1;
        self.last_response = Some(response.to_string());
        self
    }

    /// Forget all entries, the counter and the shown response.
    pub fn clear_history(mut self) -> Self {
        self.history.clear();
        self.total_generations = 0;
        self.last_response = None;
        self
    }

    /// Put an earlier input back into the draft. `index` counts from the
    /// oldest entry.
    pub fn reuse(mut self, index: usize) -> Result<Self, PromptcraftError> {
        let entry = self
            .history
            .get(index)
            .ok_or_else(|| PromptcraftError::NotFound(format!("history entry {index}")))?;
        self.draft = entry.full_input.clone();
        self.last_response = None;
        Ok(self)
    }

    pub fn apply_template(mut self, template: &QuickTemplate) -> Self {
        self.draft = template.pattern.to_string();
        self
    }

    /// Drop the shown response so the user can generate again.
    pub fn discard_result(mut self) -> Self {
        self.last_response = None;
        self
    }

    pub fn adjust_temperature(self, steps: i32) -> Self {
        let t = self.temperature + steps as f32 * TEMPERATURE_STEP;
        self.with_temperature(t)
    }
}

/// Clamp to `[0.0, 1.0]` and round to one decimal place.
pub fn clamp_temperature(t: f32) -> f32 {
    if t.is_nan() {
        return DEFAULT_TEMPERATURE;
    }
    (t.clamp(0.0, 1.0) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::QUICK_TEMPLATES;

    fn session_with(n: usize) -> Session {
        let mut s = Session::default();
        for i in 0..n {
            s = s.record_generation(&format!("input {i}"), &format!("response {i}"), Utc::now());
        }
        s
    }

    #[test]
    fn new_session_is_empty() {
        let s = Session::default();
        assert!(s.history().is_empty());
        assert_eq!(s.total_generations(), 0);
        assert!(s.last_response().is_none());
        assert_eq!(s.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn record_appends_and_counts() {
        let s = session_with(3);
        assert_eq!(s.history().len(), 3);
        assert_eq!(s.total_generations(), 3);
        assert_eq!(s.last_response(), Some("response 2"));
    }

    #[test]
    fn recent_is_newest_first_and_bounded() {
        let s = session_with(7);
        let recent: Vec<&str> = s.recent(RECENT_LIMIT).map(|e| e.full_input.as_str()).collect();
        assert_eq!(
            recent,
            vec!["input 6", "input 5", "input 4", "input 3", "input 2"]
        );
    }

    #[test]
    fn clear_resets_everything_shown() {
        let s = session_with(2).clear_history();
        assert!(s.history().is_empty());
        assert_eq!(s.total_generations(), 0);
        assert!(s.last_response().is_none());
    }

    #[test]
    fn reuse_sets_draft_and_drops_response() {
        let s = session_with(2).reuse(0).unwrap();
        assert_eq!(s.draft, "input 0");
        assert!(s.last_response().is_none());
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn reuse_out_of_range_is_not_found() {
        let err = session_with(1).reuse(5).unwrap_err();
        assert!(matches!(err, PromptcraftError::NotFound(_)));
    }

    #[test]
    fn apply_template_replaces_draft() {
        let mut s = Session::default();
        s.draft = "old".into();
        let s = s.apply_template(&QUICK_TEMPLATES[1]);
        assert_eq!(s.draft, "Generate {language} code for {task}");
    }

    #[test]
    fn discard_keeps_history() {
        let s = session_with(1).discard_result();
        assert!(s.last_response().is_none());
        assert_eq!(s.total_generations(), 1);
    }

    #[test]
    fn temperature_steps_and_clamps() {
        let s = Session::default().adjust_temperature(2);
        assert!((s.temperature - 0.9).abs() < f32::EPSILON);
        let s = s.adjust_temperature(5);
        assert_eq!(s.temperature, 1.0);
        let s = s.adjust_temperature(-20);
        assert_eq!(s.temperature, 0.0);
        let s = Session::default().with_temperature(f32::NAN);
        assert_eq!(s.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn clamp_rounds_to_one_decimal() {
        assert!((clamp_temperature(0.34) - 0.3).abs() < f32::EPSILON);
        assert_eq!(clamp_temperature(-1.0), 0.0);
        assert_eq!(clamp_temperature(3.5), 1.0);
        assert_eq!(clamp_temperature(f32::NAN), DEFAULT_TEMPERATURE);
    }

    #[test]
    fn request_reflects_options() {
        let mut s = Session::default();
        s.draft = "need".into();
        s.tone = Tone::Casual;
        s.audience = Audience::Academic;
        let req = s.request();
        assert_eq!(req.need, "need");
        assert_eq!(req.tone, Tone::Casual);
        assert_eq!(req.audience, Audience::Academic);
        assert_eq!(req.purpose, Purpose::CreativeWriting);
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four fixed parts of a structured reply, in reply order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionLabel {
    DetectedIntent,
    SuggestedPromptType,
    PromptTemplate,
    UsageTips,
}

impl SectionLabel {
    pub const ALL: &'static [SectionLabel] = &[
        SectionLabel::DetectedIntent,
        SectionLabel::SuggestedPromptType,
        SectionLabel::PromptTemplate,
        SectionLabel::UsageTips,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::DetectedIntent => "DETECTED_INTENT",
            SectionLabel::SuggestedPromptType => "SUGGESTED_PROMPT_TYPE",
            SectionLabel::PromptTemplate => "PROMPT_TEMPLATE",
            SectionLabel::UsageTips => "USAGE_TIPS",
        }
    }

    /// Literal heading text, as requested in the prompt and matched in replies.
    pub fn header(&self) -> &'static str {
        match self {
            SectionLabel::DetectedIntent => "DETECTED INTENT",
            SectionLabel::SuggestedPromptType => "SUGGESTED PROMPT TYPE",
            SectionLabel::PromptTemplate => "COPY-PASTEABLE PROMPT TEMPLATE",
            SectionLabel::UsageTips => "USAGE TIPS",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SectionLabel::DetectedIntent => "Detected Intent",
            SectionLabel::SuggestedPromptType => "Suggested Prompt Type",
            SectionLabel::PromptTemplate => "Prompt Template",
            SectionLabel::UsageTips => "Usage Tips",
        }
    }

    /// Classify a line as a section heading.
    ///
    /// A line is a heading when, ignoring case and surrounding whitespace, it
    /// *starts with* one of the heading texts. This is a prefix test, so a body
    /// sentence such as "Usage tips are..." is also taken as a heading.
    /// No heading text is a prefix of another, so at most one label matches
    /// and the result does not depend on the order of `ALL`.
    pub fn classify(line: &str) -> Option<Self> {
        let upper = line.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|label| upper.starts_with(label.header()))
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reply split into the four labelled sections.
///
/// Every label is always present; a label that never appeared maps to `""`.
/// Non-empty values end with a line break, see [`SectionedResponse::trimmed`].
/// Serialized keys are the label names, e.g. `DETECTED_INTENT`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SectionedResponse {
    pub detected_intent: String,
    pub suggested_prompt_type: String,
    pub prompt_template: String,
    pub usage_tips: String,
}

impl SectionedResponse {
    pub fn get(&self, label: SectionLabel) -> &str {
        match label {
            SectionLabel::DetectedIntent => &self.detected_intent,
            SectionLabel::SuggestedPromptType => &self.suggested_prompt_type,
            SectionLabel::PromptTemplate => &self.prompt_template,
            SectionLabel::UsageTips => &self.usage_tips,
        }
    }

    pub fn get_mut(&mut self, label: SectionLabel) -> &mut String {
        match label {
            SectionLabel::DetectedIntent => &mut self.detected_intent,
            SectionLabel::SuggestedPromptType => &mut self.suggested_prompt_type,
            SectionLabel::PromptTemplate => &mut self.prompt_template,
            SectionLabel::UsageTips => &mut self.usage_tips,
        }
    }

    /// Section content with surrounding whitespace removed, for display.
    pub fn trimmed(&self, label: SectionLabel) -> &str {
        self.get(label).trim()
    }

    /// All four sections in reply order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (SectionLabel, &str)> + '_ {
        SectionLabel::ALL.iter().map(move |&label| (label, self.get(label)))
    }

    /// True when no section was recognized. This is the only condition under
    /// which callers fall back to showing the raw reply.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, text)| text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_display_matches_as_str() {
        for l in SectionLabel::ALL {
            assert_eq!(format!("{l}"), l.as_str());
        }
    }

    #[test]
    fn classify_headers_any_case() {
        assert_eq!(
            SectionLabel::classify("DETECTED INTENT:"),
            Some(SectionLabel::DetectedIntent)
        );
        assert_eq!(
            SectionLabel::classify("suggested prompt type:"),
            Some(SectionLabel::SuggestedPromptType)
        );
        assert_eq!(
            SectionLabel::classify("  Copy-Pasteable Prompt Template"),
            Some(SectionLabel::PromptTemplate)
        );
        assert_eq!(
            SectionLabel::classify("Usage Tips are important."),
            Some(SectionLabel::UsageTips)
        );
    }

    #[test]
    fn classify_rejects_non_prefix() {
        assert_eq!(SectionLabel::classify("Some USAGE TIPS:"), None);
        assert_eq!(SectionLabel::classify("**DETECTED INTENT:**"), None);
        assert_eq!(SectionLabel::classify("PROMPT TEMPLATE:"), None);
        assert_eq!(SectionLabel::classify(""), None);
    }

    #[test]
    fn no_header_is_prefix_of_another() {
        for a in SectionLabel::ALL {
            for b in SectionLabel::ALL {
                if a != b {
                    assert!(!a.header().starts_with(b.header()));
                }
            }
        }
    }

    #[test]
    fn default_response_is_empty() {
        let r = SectionedResponse::default();
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 4);
    }

    #[test]
    fn trimmed_strips_trailing_newline() {
        let mut r = SectionedResponse::default();
        r.get_mut(SectionLabel::UsageTips).push_str("tip one\ntip two\n");
        assert!(!r.is_empty());
        assert_eq!(r.trimmed(SectionLabel::UsageTips), "tip one\ntip two");
        assert_eq!(r.get(SectionLabel::DetectedIntent), "");
    }

    #[test]
    fn serializes_keyed_by_label_names() {
        let json = serde_json::to_value(crate::sectionize("DETECTED INTENT:\nFoo\n")).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for label in SectionLabel::ALL {
            let key = serde_json::to_value(label).unwrap();
            assert_eq!(key, label.as_str());
            assert!(obj.contains_key(label.as_str()), "missing key {label}");
        }
        assert_eq!(obj["DETECTED_INTENT"], "Foo\n");
        assert_eq!(obj["USAGE_TIPS"], "");
    }

    #[test]
    fn deserializes_from_label_names() {
        let r: SectionedResponse = serde_json::from_str(
            r#"{"DETECTED_INTENT":"a","SUGGESTED_PROMPT_TYPE":"b","PROMPT_TEMPLATE":"c","USAGE_TIPS":"d"}"#,
        )
        .unwrap();
        assert_eq!(r.get(SectionLabel::PromptTemplate), "c");
        assert_eq!(r.get(SectionLabel::UsageTips), "d");
    }
}

//! The fixed choices offered for each generation parameter.
//!
//! `as_str` returns the human label that is also substituted into the prompt.
//! `parse_str` accepts that label or its kebab-case form, ignoring case.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shared behaviour of the option enums: an ordered list of choices that the
/// TUI steps through.
pub trait Choice: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse_str(s: &str) -> Option<Self> {
        let wanted = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|c| normalize(c.as_str()) == wanted)
    }

    /// Next choice, wrapping around.
    fn next(&self) -> Self {
        let all = Self::ALL;
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous choice, wrapping around.
    fn prev(&self) -> Self {
        let all = Self::ALL;
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    #[default]
    CreativeWriting,
    CodeGeneration,
    ContentAnalysis,
    Research,
    Business,
    Education,
    Marketing,
}

impl Choice for Purpose {
    const ALL: &'static [Self] = &[
        Purpose::CreativeWriting,
        Purpose::CodeGeneration,
        Purpose::ContentAnalysis,
        Purpose::Research,
        Purpose::Business,
        Purpose::Education,
        Purpose::Marketing,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Purpose::CreativeWriting => "Creative Writing",
            Purpose::CodeGeneration => "Code Generation",
            Purpose::ContentAnalysis => "Content Analysis",
            Purpose::Research => "Research",
            Purpose::Business => "Business",
            Purpose::Education => "Education",
            Purpose::Marketing => "Marketing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Formal,
    Friendly,
    Technical,
}

impl Choice for Tone {
    const ALL: &'static [Self] = &[
        Tone::Professional,
        Tone::Casual,
        Tone::Formal,
        Tone::Friendly,
        Tone::Technical,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
            Tone::Technical => "Technical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    #[default]
    Simple,
    Moderate,
    Advanced,
}

impl Choice for Complexity {
    const ALL: &'static [Self] = &[Complexity::Simple, Complexity::Moderate, Complexity::Advanced];

    fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Moderate => "Moderate",
            Complexity::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    General,
    Technical,
    Business,
    Academic,
}

impl Choice for Audience {
    const ALL: &'static [Self] = &[
        Audience::General,
        Audience::Technical,
        Audience::Business,
        Audience::Academic,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Audience::General => "General",
            Audience::Technical => "Technical",
            Audience::Business => "Business",
            Audience::Academic => "Academic",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

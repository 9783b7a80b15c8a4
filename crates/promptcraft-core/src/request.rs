use serde::{Deserialize, Serialize};

use crate::error::PromptcraftError;
use crate::options::{Audience, Complexity, Purpose, Tone};

/// Everything the user chose for one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub need: String,
    #[serde(default)]
    pub purpose: Purpose,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub audience: Audience,
}

impl GenerationRequest {
    pub fn new(need: impl Into<String>) -> Self {
        Self {
            need: need.into(),
            ..Default::default()
        }
    }

    /// A request needs a non-blank description of what the user wants.
    pub fn validate(&self) -> Result<(), PromptcraftError> {
        if self.need.trim().is_empty() {
            return Err(PromptcraftError::InvalidInput(
                "please enter your requirements".into(),
            ));
        }
        Ok(())
    }
}

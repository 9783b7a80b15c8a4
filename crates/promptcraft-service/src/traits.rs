use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("missing credentials: {0}")]
    MissingCredentials(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("empty response from model")]
    EmptyResponse,

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Per-call knobs passed through to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionSettings {
    pub temperature: f32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self { temperature: 0.7 }
    }
}

/// A remote model that turns a prompt into a text completion.
///
/// Authentication, timeouts and transport live in the implementation.
/// Callers never retry; a failure is reported as-is.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name for logging.
    fn name(&self) -> &str;

    /// Optional model identifier for logging/display purposes.
    fn model_hint(&self) -> Option<&str> {
        None
    }

    async fn complete(
        &self,
        prompt: &str,
        settings: CompletionSettings,
    ) -> Result<String, ProviderError>;
}

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{CompletionProvider, CompletionSettings, ProviderError};

enum Reply {
    Text(String),
    Fail(String),
}

/// A provider for tests that returns a preconfigured reply and remembers
/// every prompt it was given.
pub struct MockProvider {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl MockProvider {
    /// Create a mock that answers every prompt with `text`.
    pub fn success(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock whose calls fail with a connection error.
    pub fn failure(message: &str) -> Self {
        Self {
            reply: Reply::Fail(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(
        &self,
        prompt: &str,
        _settings: CompletionSettings,
    ) -> Result<String, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(message) => Err(ProviderError::Connection(message.clone())),
        }
    }
}

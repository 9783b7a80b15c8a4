use std::sync::Arc;

use promptcraft_core::GenerationRequest;
use tokio::runtime::Runtime;

use crate::{generate, CompletionProvider, CompletionSettings, GenerateError, Generation, ProviderError};

/// Blocking wrapper around an async `CompletionProvider`.
///
/// Creates an internal tokio runtime and uses `block_on()` for each call.
/// Designed for sync callers like the TUI.
pub struct BlockingProvider {
    inner: Arc<dyn CompletionProvider>,
    rt: Runtime,
}

impl BlockingProvider {
    pub fn new(inner: Arc<dyn CompletionProvider>) -> std::io::Result<Self> {
        Ok(Self {
            inner,
            rt: Runtime::new()?,
        })
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn model_hint(&self) -> Option<&str> {
        self.inner.model_hint()
    }

    pub fn complete(
        &self,
        prompt: &str,
        settings: CompletionSettings,
    ) -> Result<String, ProviderError> {
        self.rt.block_on(self.inner.complete(prompt, settings))
    }

    pub fn generate(
        &self,
        request: &GenerationRequest,
        settings: CompletionSettings,
    ) -> Result<Generation, GenerateError> {
        self.rt
            .block_on(generate(self.inner.as_ref(), request, settings))
    }
}

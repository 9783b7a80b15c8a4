use promptcraft_core::{sectionize, GenerationRequest, PromptcraftError, SectionedResponse};
use thiserror::Error;
use tracing::{info, warn};

use crate::{CompletionProvider, CompletionSettings, ProviderError};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Request(#[from] PromptcraftError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Result of one successful round trip.
#[derive(Debug, Clone)]
pub struct Generation {
    pub prompt: String,
    pub response: String,
    pub sections: SectionedResponse,
}

/// Validate the request, compile the prompt, ask the provider and split the reply.
///
/// A reply with no recognizable headings is still a success; its
/// `sections` are all empty and the caller shows `response` instead.
pub async fn generate(
    provider: &dyn CompletionProvider,
    request: &GenerationRequest,
    settings: CompletionSettings,
) -> Result<Generation, GenerateError> {
    request.validate()?;

    let prompt = promptcraft_prompts::assemble_prompt(request);
    info!(
        provider = provider.name(),
        model = provider.model_hint().unwrap_or("-"),
        purpose = %request.purpose,
        "generating prompt template"
    );

    let response = provider.complete(&prompt, settings).await?;
    let sections = sectionize(&response);
    if sections.is_empty() {
        warn!("reply had no recognizable sections ({} bytes)", response.len());
    }

    Ok(Generation {
        prompt,
        response,
        sections,
    })
}

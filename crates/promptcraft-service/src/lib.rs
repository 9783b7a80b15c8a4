mod blocking;
mod gemini;
mod generate;
mod mock;
mod traits;

pub use blocking::BlockingProvider;
pub use gemini::{GeminiProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use generate::{generate, GenerateError, Generation};
pub use mock::MockProvider;
pub use traits::{CompletionProvider, CompletionSettings, ProviderError};

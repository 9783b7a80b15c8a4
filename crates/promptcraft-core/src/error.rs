use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptcraftError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),
}

//! Typed error for the generation chain.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    /// The text-generation endpoint failed; wraps the underlying failure
    /// text. Never retried internally.
    #[error("failed to generate response: {0}")]
    Generation(String),
}

impl From<llm_service::LlmError> for ChainError {
    fn from(err: llm_service::LlmError) -> Self {
        ChainError::Generation(err.to_string())
    }
}

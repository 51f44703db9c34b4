//! Text-generation seam over the shared LLM service.

use std::future::Future;
use std::pin::Pin;

use llm_service::LlmService;

use crate::error::ChainError;

/// Single text-in/text-out generation call, object-safe so tests can
/// substitute a scripted generator for the real endpoint.
pub trait TextGenerator: Send + Sync {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ChainError>> + Send + 'a>>;
}

impl TextGenerator for LlmService {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ChainError>> + Send + 'a>> {
        Box::pin(async move { Ok(LlmService::generate(self, prompt).await?) })
    }
}

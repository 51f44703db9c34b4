//! Ollama-backed embedding provider.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use llm_service::LlmService;

use crate::embed::EmbeddingsProvider;
use crate::errors::DocStoreError;

/// Embeds text through the shared LLM service's embedding profile and
/// enforces the collection's dimensionality.
#[derive(Clone)]
pub struct OllamaEmbedder {
    svc: Arc<LlmService>,
    dim: usize,
}

impl OllamaEmbedder {
    pub fn new(svc: Arc<LlmService>, dim: usize) -> Self {
        Self { svc, dim }
    }
}

impl EmbeddingsProvider for OllamaEmbedder {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, DocStoreError>> + Send + 'a>> {
        Box::pin(async move {
            let vector = self
                .svc
                .embed(text)
                .await
                .map_err(|e| DocStoreError::Embedding(e.to_string()))?;

            if vector.len() != self.dim {
                return Err(DocStoreError::VectorSizeMismatch {
                    got: vector.len(),
                    want: self.dim,
                });
            }

            Ok(vector)
        })
    }
}

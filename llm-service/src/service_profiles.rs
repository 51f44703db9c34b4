//! Bundles the two model profiles the backend needs: generation and
//! embeddings.
//!
//! Construct once at startup, wrap in `Arc`, and pass clones to dependents.

use crate::config::llm_model_config::LlmModelConfig;
use crate::error_handler::LlmError;
use crate::health_service::{HealthService, HealthStatus};
use crate::services::ollama_service::OllamaService;

/// Shared service exposing generation and embeddings over one Ollama
/// endpoint (the two profiles may still differ in model and knobs).
pub struct LlmService {
    generation_cfg: LlmModelConfig,
    embedding_cfg: LlmModelConfig,
    generation: OllamaService,
    embedding: OllamaService,
    health: HealthService,
}

impl LlmService {
    /// Builds both clients up front so endpoint problems surface at
    /// startup rather than on the first query.
    ///
    /// # Errors
    /// Returns [`LlmError`] if either endpoint is invalid or an HTTP
    /// client cannot be built.
    pub fn new(
        generation_cfg: LlmModelConfig,
        embedding_cfg: LlmModelConfig,
    ) -> Result<Self, LlmError> {
        let generation = OllamaService::new(generation_cfg.clone())?;
        let embedding = OllamaService::new(embedding_cfg.clone())?;
        let health = HealthService::new(Some(10))?;

        Ok(Self {
            generation_cfg,
            embedding_cfg,
            generation,
            embedding,
            health,
        })
    }

    /// Generates text with the generation profile.
    ///
    /// # Errors
    /// Returns [`LlmError`] if the call fails; never retried here.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        Ok(self.generation.generate(prompt).await?)
    }

    /// Computes an embedding with the embedding profile.
    ///
    /// # Errors
    /// Returns [`LlmError`] if the call fails; never retried here.
    pub async fn embed(&self, input: &str) -> Result<Vec<f32>, LlmError> {
        Ok(self.embedding.embeddings(input).await?)
    }

    /// Health snapshot for both profiles. Identical profiles are probed
    /// only once.
    pub async fn health_all(&self) -> Vec<HealthStatus> {
        let mut configs = vec![self.generation_cfg.clone()];
        if self.embedding_cfg != self.generation_cfg {
            configs.push(self.embedding_cfg.clone());
        }
        self.health.check_many(&configs).await
    }
}

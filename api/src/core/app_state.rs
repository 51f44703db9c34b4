//! Shared state for all HTTP handlers, built once at startup.

use std::sync::Arc;

use context_store::ContextStore;
use doc_store::embed::ollama::OllamaEmbedder;
use doc_store::{DocStore, DocStoreConfig};
use llm_service::LlmService;
use llm_service::config::default_config;
use support_chain::SupportChain;
use tracing::{error, info};

use crate::core::support_system::SupportSystem;
use crate::error_handler::AppError;

/// Application state: the orchestrator; everything else lives inside it.
#[derive(Clone)]
pub struct AppState {
    pub support: Arc<SupportSystem>,
}

impl AppState {
    /// Wires configuration and collaborators.
    ///
    /// # Errors
    /// Fatal at startup: an unhealthy generation/embedding endpoint or an
    /// unreachable Qdrant aborts before the listener binds.
    pub async fn init() -> Result<Self, AppError> {
        let generation = default_config::config_ollama_generation()?;
        let embedding = default_config::config_ollama_embedding()?;
        let llm = Arc::new(LlmService::new(generation, embedding)?);

        for status in llm.health_all().await {
            if status.ok {
                info!(endpoint = %status.endpoint, model = %status.model, "model endpoint healthy");
            } else {
                error!(
                    endpoint = %status.endpoint,
                    model = %status.model,
                    message = %status.message,
                    "model endpoint unhealthy"
                );
                return Err(AppError::Startup(format!(
                    "model endpoint unhealthy ({}): {}",
                    status.model, status.message
                )));
            }
        }

        let cfg = DocStoreConfig::from_env();
        let embedder = Arc::new(OllamaEmbedder::new(llm.clone(), cfg.embedding_dim));
        let store = DocStore::connect(cfg, embedder).await?;

        let chain = SupportChain::new(llm);
        let sessions = Arc::new(ContextStore::new());
        let support = Arc::new(SupportSystem::new(Arc::new(store), chain, sessions));

        info!("payment support system initialized");
        Ok(Self { support })
    }
}

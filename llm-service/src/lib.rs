//! Client layer over an Ollama-style endpoint.
//!
//! Provides non-streaming text generation (`POST /api/generate`),
//! embeddings (`POST /api/embeddings`), env-driven model configs, and
//! startup health probes. The endpoint and model names are configuration;
//! inference itself always happens on the external server.

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod service_profiles;
pub mod services;

pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::{ConfigError, HealthError, LlmError};
pub use health_service::{HealthService, HealthStatus};
pub use service_profiles::LlmService;
pub use services::ollama_service::{OllamaError, OllamaService};

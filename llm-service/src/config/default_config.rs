//! Model configs sourced from environment variables, with defaults.
//!
//! # Environment variables
//!
//! - `OLLAMA_URL` or `OLLAMA_PORT` → endpoint (default `http://localhost:11434`)
//! - `OLLAMA_MODEL`    → generation model (default `llama2`)
//! - `EMBEDDING_MODEL` → embedding model (default `nomic-embed-text`)
//! - `LLM_MAX_TOKENS`  → optional generation cap

use crate::config::llm_model_config::LlmModelConfig;
use crate::error_handler::{ConfigError, LlmError, env_opt_u32};

/// Resolves the Ollama endpoint.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
/// 3. the local default `http://localhost:11434`
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if `OLLAMA_PORT` is set but not
/// a valid port.
pub fn ollama_endpoint() -> Result<String, LlmError> {
    if let Ok(url) = std::env::var("OLLAMA_URL") {
        if !url.trim().is_empty() {
            return Ok(url);
        }
    }
    if let Ok(port) = std::env::var("OLLAMA_PORT") {
        if !port.trim().is_empty() {
            port.parse::<u16>().map_err(|_| ConfigError::InvalidNumber {
                var: "OLLAMA_PORT",
                reason: "expected u16 (1..=65535)",
            })?;
            return Ok(format!("http://localhost:{port}"));
        }
    }
    Ok("http://localhost:11434".to_string())
}

/// Config for the generation model that answers support questions.
///
/// # Env
/// - `OLLAMA_MODEL` (default `llama2`)
/// - `LLM_MAX_TOKENS` (optional)
pub fn config_ollama_generation() -> Result<LlmModelConfig, LlmError> {
    let endpoint = ollama_endpoint()?;
    let model = env_or("OLLAMA_MODEL", "llama2");
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        model,
        endpoint,
        max_tokens,
        temperature: Some(0.7),
        top_p: Some(0.9),
        timeout_secs: Some(120),
    })
}

/// Config for the embedding model backing vector search.
///
/// # Env
/// - `EMBEDDING_MODEL` (default `nomic-embed-text`)
pub fn config_ollama_embedding() -> Result<LlmModelConfig, LlmError> {
    let endpoint = ollama_endpoint()?;
    let model = env_or("EMBEDDING_MODEL", "nomic-embed-text");

    Ok(LlmModelConfig {
        model,
        endpoint,
        max_tokens: None,
        temperature: Some(0.0),
        top_p: None,
        timeout_secs: Some(30),
    })
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Configuration for one model profile on the Ollama endpoint.
///
/// The backend runs two profiles: a generation model that answers support
/// questions and an embedding model that vectorizes text for retrieval.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// Model identifier string (e.g. `"llama2"`, `"nomic-embed-text"`).
    pub model: String,

    /// Endpoint base URL (e.g. `"http://localhost:11434"`).
    pub endpoint: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

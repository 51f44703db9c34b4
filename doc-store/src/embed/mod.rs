use std::future::Future;
use std::pin::Pin;

use crate::errors::DocStoreError;

/// Provider interface for embedding generation.
///
/// Async because real providers perform HTTP requests; implementations box
/// the future so the trait stays object-safe. Implement this to plug in a
/// different embedding backend.
pub trait EmbeddingsProvider: Send + Sync {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, DocStoreError>> + Send + 'a>>;
}

pub mod hash_embedder;
pub mod ollama;

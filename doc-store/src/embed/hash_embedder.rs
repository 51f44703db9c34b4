//! Deterministic offline embedder.
//!
//! Folds the input bytes into a fixed-dimension vector. Not a semantic
//! embedding; exists so the ingestion and retrieval plumbing can be
//! exercised without an embedding endpoint.

use std::future::Future;
use std::pin::Pin;

use crate::embed::EmbeddingsProvider;
use crate::errors::DocStoreError;

#[derive(Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl EmbeddingsProvider for HashEmbedder {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, DocStoreError>> + Send + 'a>> {
        Box::pin(async move {
            let mut out = vec![0.0f32; self.dim];
            for (i, b) in text.bytes().enumerate() {
                out[i % self.dim] += f32::from(b) / 255.0;
            }
            Ok(out)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn is_deterministic_and_fixed_dimension() {
        let embedder = HashEmbedder::new(8);
        let a = embedder.embed("insufficient funds").await.unwrap();
        let b = embedder.embed("insufficient funds").await.unwrap();
        let c = embedder.embed("card expired").await.unwrap();

        assert_eq!(a.len(), 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

//! Runtime and collection configuration.

use crate::errors::DocStoreError;

/// Distance function used for the vector space.
#[derive(Clone, Copy, Debug)]
pub enum DistanceKind {
    /// Cosine distance (what this corpus uses).
    Cosine,
    /// Dot product.
    Dot,
    /// Euclidean distance (L2).
    Euclid,
}

/// Describes the vector space of the collection.
#[derive(Clone, Debug)]
pub struct VectorSpace {
    /// Dimensionality of vectors.
    pub size: usize,
    /// Distance function.
    pub distance: DistanceKind,
}

/// Configuration for the document gateway.
#[derive(Clone, Debug)]
pub struct DocStoreConfig {
    /// Qdrant gRPC endpoint, e.g. `http://localhost:6334`.
    pub qdrant_url: String,
    /// Optional API key for Qdrant Cloud.
    pub qdrant_api_key: Option<String>,
    /// Target collection name.
    pub collection: String,
    /// Distance function (cosine for this corpus).
    pub distance: DistanceKind,
    /// Embedding dimensionality the collection is created with.
    pub embedding_dim: usize,
    /// Upsert batch size.
    pub upsert_batch: usize,
    /// Request timeout for Qdrant calls, in seconds.
    pub timeout_secs: u64,
    /// Chunking knobs carried from the environment. Accepted but unused by
    /// the retrieval path: documents are indexed whole.
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl DocStoreConfig {
    /// Builds the config from environment variables, with defaults.
    ///
    /// - `QDRANT_URL` (default `http://localhost:6334`)
    /// - `QDRANT_API_KEY` (optional)
    /// - `QDRANT_COLLECTION` (default `payment_docs`)
    /// - `EMBEDDING_DIM` (default `768`)
    /// - `QDRANT_BATCH_SIZE` (default `256`)
    /// - `QDRANT_TIMEOUT_SECS` (default `30`)
    /// - `CHUNK_SIZE` / `CHUNK_OVERLAP` (defaults `500` / `50`)
    pub fn from_env() -> Self {
        Self {
            qdrant_url: env_or("QDRANT_URL", "http://localhost:6334"),
            qdrant_api_key: std::env::var("QDRANT_API_KEY").ok(),
            collection: env_or("QDRANT_COLLECTION", "payment_docs"),
            distance: DistanceKind::Cosine,
            embedding_dim: parse_or("EMBEDDING_DIM", 768),
            upsert_batch: parse_or("QDRANT_BATCH_SIZE", 256),
            timeout_secs: parse_or("QDRANT_TIMEOUT_SECS", 30),
            chunk_size: parse_or("CHUNK_SIZE", 500),
            chunk_overlap: parse_or("CHUNK_OVERLAP", 50),
        }
    }

    /// Validates config values.
    ///
    /// # Errors
    /// Returns [`DocStoreError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<(), DocStoreError> {
        if self.qdrant_url.trim().is_empty() {
            return Err(DocStoreError::Config("qdrant_url is empty".into()));
        }
        if self.collection.trim().is_empty() {
            return Err(DocStoreError::Config("collection is empty".into()));
        }
        if self.embedding_dim == 0 {
            return Err(DocStoreError::Config("embedding_dim must be > 0".into()));
        }
        if self.upsert_batch == 0 {
            return Err(DocStoreError::Config("upsert_batch must be > 0".into()));
        }
        Ok(())
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> DocStoreConfig {
        DocStoreConfig {
            qdrant_url: "http://localhost:6334".into(),
            qdrant_api_key: None,
            collection: "payment_docs".into(),
            distance: DistanceKind::Cosine,
            embedding_dim: 768,
            upsert_batch: 256,
            timeout_secs: 30,
            chunk_size: 500,
            chunk_overlap: 50,
        }
    }

    #[test]
    fn accepts_valid_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rejects_empty_collection() {
        let cfg = DocStoreConfig {
            collection: "  ".into(),
            ..valid()
        };
        assert!(matches!(cfg.validate(), Err(DocStoreError::Config(_))));
    }

    #[test]
    fn rejects_zero_dimensionality() {
        let cfg = DocStoreConfig {
            embedding_dim: 0,
            ..valid()
        };
        assert!(matches!(cfg.validate(), Err(DocStoreError::Config(_))));
    }
}

//! Embedding and search gateway over Qdrant for the payment-support
//! corpus.
//!
//! [`DocStore`] is the single entry point recommended for application
//! code: constructing it bootstraps the collection idempotently,
//! [`DocStore::add_documents`] embeds and upserts the seed corpus, and
//! [`DocStore::search`] embeds a query and returns the closest documents.
//! The vector index itself lives entirely in Qdrant; this crate only
//! speaks to it.

mod config;
mod errors;
mod ingest;
mod io_jsonl;
mod qdrant_facade;
mod record;
mod retrieve;

pub mod embed;

pub use config::{DistanceKind, DocStoreConfig, VectorSpace};
pub use errors::DocStoreError;
pub use io_jsonl::read_docs_jsonl;
pub use record::SupportDoc;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::trace;

use crate::embed::EmbeddingsProvider;

/// Search seam used by the query orchestrator; object-safe so tests can
/// substitute an in-memory corpus for the real database.
pub trait DocumentSearch: Send + Sync {
    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SupportDoc>, DocStoreError>> + Send + 'a>>;
}

/// High-level facade wiring configuration, the Qdrant client, and the
/// embedding provider.
pub struct DocStore {
    cfg: DocStoreConfig,
    client: qdrant_facade::QdrantFacade,
    embedder: Arc<dyn EmbeddingsProvider>,
}

impl DocStore {
    /// Connects to Qdrant and ensures the collection exists with the
    /// configured dimensionality and distance. An existing collection is
    /// left untouched.
    ///
    /// # Errors
    /// Returns [`DocStoreError::Config`] on invalid configuration and
    /// [`DocStoreError::Qdrant`] when the database is unreachable; both
    /// are fatal at startup.
    pub async fn connect(
        cfg: DocStoreConfig,
        embedder: Arc<dyn EmbeddingsProvider>,
    ) -> Result<Self, DocStoreError> {
        trace!("DocStore::connect collection={}", cfg.collection);
        let client = qdrant_facade::QdrantFacade::new(&cfg)?;
        client
            .ensure_collection(&VectorSpace {
                size: cfg.embedding_dim,
                distance: cfg.distance,
            })
            .await?;
        Ok(Self {
            cfg,
            client,
            embedder,
        })
    }

    /// Embeds each document's content and upserts one point per document.
    /// Returns how many points were sent.
    ///
    /// # Errors
    /// Returns embedding errors, dimensionality mismatches, or Qdrant
    /// failures.
    pub async fn add_documents(&self, docs: &[SupportDoc]) -> Result<usize, DocStoreError> {
        ingest::add_documents(&self.cfg, &self.client, docs, self.embedder.as_ref()).await
    }

    /// Embeds `query` and returns up to `limit` documents ordered by
    /// descending similarity. An empty result is a legal outcome.
    ///
    /// # Errors
    /// Returns embedding errors or Qdrant failures.
    pub async fn search(&self, query: &str, limit: u64) -> Result<Vec<SupportDoc>, DocStoreError> {
        retrieve::search(&self.client, self.embedder.as_ref(), query, limit).await
    }
}

impl DocumentSearch for DocStore {
    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SupportDoc>, DocStoreError>> + Send + 'a>> {
        Box::pin(DocStore::search(self, query, limit))
    }
}

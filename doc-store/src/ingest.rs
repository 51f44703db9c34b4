//! Corpus ingestion: embed document contents and upsert one point per
//! document.

use std::collections::HashMap;

use qdrant_client::qdrant::{PointId, PointStruct, Value as QValue, Vector, Vectors, value, vectors};
use services::uuid::stable_uuid;
use tracing::{debug, info};

use crate::config::DocStoreConfig;
use crate::embed::EmbeddingsProvider;
use crate::errors::DocStoreError;
use crate::qdrant_facade::QdrantFacade;
use crate::record::SupportDoc;

/// Embeds and upserts the given documents in batches.
///
/// Point ids are stable UUIDv5s derived from the document title, so
/// re-seeding the same corpus updates points in place instead of
/// appending duplicates.
///
/// # Errors
/// Returns embedding errors, dimensionality mismatches, or Qdrant
/// failures; nothing is partially retried.
pub async fn add_documents(
    cfg: &DocStoreConfig,
    client: &QdrantFacade,
    docs: &[SupportDoc],
    provider: &dyn EmbeddingsProvider,
) -> Result<usize, DocStoreError> {
    if docs.is_empty() {
        debug!("no documents to ingest");
        return Ok(0);
    }

    info!("ingesting {} documents into '{}'", docs.len(), cfg.collection);

    let mut total = 0usize;
    for chunk in docs.chunks(cfg.upsert_batch.max(1)) {
        let points = build_points(cfg, chunk, provider).await?;
        total += client.upsert_points(points).await?;
    }

    Ok(total)
}

/// Builds Qdrant points for a batch of documents.
async fn build_points(
    cfg: &DocStoreConfig,
    docs: &[SupportDoc],
    provider: &dyn EmbeddingsProvider,
) -> Result<Vec<PointStruct>, DocStoreError> {
    let mut points = Vec::with_capacity(docs.len());

    for doc in docs {
        let vector = provider.embed(&doc.content).await?;
        if vector.len() != cfg.embedding_dim {
            return Err(DocStoreError::VectorSizeMismatch {
                got: vector.len(),
                want: cfg.embedding_dim,
            });
        }

        let mut payload: HashMap<String, QValue> = HashMap::new();
        payload.insert("title".into(), qstring(&doc.title));
        payload.insert("content".into(), qstring(&doc.content));
        payload.insert("category".into(), qstring(&doc.category));
        payload.insert("help_url".into(), qstring(&doc.help_url));

        let id: PointId = stable_uuid(&doc.title).to_string().into();

        let vectors = Vectors {
            vectors_options: Some(vectors::VectorsOptions::Vector(Vector {
                data: vector,
                indices: None,
                vectors_count: None,
                vector: None,
            })),
        };

        points.push(PointStruct {
            id: Some(id),
            payload,
            vectors: Some(vectors),
            ..Default::default()
        });
    }

    Ok(points)
}

/// Wraps a string into a Qdrant `Value`.
fn qstring(s: &str) -> QValue {
    QValue {
        kind: Some(value::Kind::StringValue(s.to_string())),
    }
}

//! Query-side retrieval: embed the query text and search the collection.

use tracing::{debug, trace, warn};

use crate::embed::EmbeddingsProvider;
use crate::errors::DocStoreError;
use crate::qdrant_facade::QdrantFacade;
use crate::record::{SupportDoc, payload_to_doc};

/// Embeds the query and returns the closest documents in score order.
///
/// Hits whose payload does not parse back into a document are skipped
/// with a warning rather than failing the query.
///
/// # Errors
/// Returns embedding errors or Qdrant failures.
pub async fn search(
    client: &QdrantFacade,
    provider: &dyn EmbeddingsProvider,
    query: &str,
    limit: u64,
) -> Result<Vec<SupportDoc>, DocStoreError> {
    trace!("retrieve::search limit={limit}");

    let vector = provider.embed(query).await?;
    let hits = client.search(vector, limit).await?;

    let mut docs = Vec::with_capacity(hits.len());
    for (score, payload) in hits {
        match payload_to_doc(&payload) {
            Some(doc) => {
                debug!(score, title = %doc.title, "hit");
                docs.push(doc);
            }
            None => warn!("skipping hit with malformed payload"),
        }
    }

    Ok(docs)
}

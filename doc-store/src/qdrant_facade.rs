//! Thin adapter around `qdrant-client` to isolate API usage.
//!
//! All Qdrant interactions go through this facade, keeping the builder
//! verbosity out of the rest of the crate.

use std::time::Duration;

use qdrant_client::Qdrant;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, Distance, PointStruct, SearchPointsBuilder, UpsertPointsBuilder,
    Value as QValue, VectorParamsBuilder,
};
use tracing::{debug, info, warn};

use crate::config::{DistanceKind, DocStoreConfig, VectorSpace};
use crate::errors::DocStoreError;

/// Facade over the Qdrant client: collection bootstrap, upserts, search.
pub struct QdrantFacade {
    client: Qdrant,
    collection: String,
    distance: DistanceKind,
}

impl QdrantFacade {
    /// Builds the client from config with a bounded request timeout.
    ///
    /// # Errors
    /// Returns [`DocStoreError::Config`] on invalid config and
    /// [`DocStoreError::Qdrant`] if client construction fails.
    pub fn new(cfg: &DocStoreConfig) -> Result<Self, DocStoreError> {
        cfg.validate()?;

        let mut builder =
            Qdrant::from_url(&cfg.qdrant_url).timeout(Duration::from_secs(cfg.timeout_secs));
        if let Some(key) = &cfg.qdrant_api_key {
            builder = builder.api_key(key.clone());
        }
        let client = builder
            .build()
            .map_err(|e| DocStoreError::Qdrant(e.to_string()))?;

        Ok(Self {
            client,
            collection: cfg.collection.clone(),
            distance: cfg.distance,
        })
    }

    /// Ensures that the collection exists.
    ///
    /// - Already exists → no-op, existing data is left untouched.
    /// - Missing → created with the given vector space.
    pub async fn ensure_collection(&self, space: &VectorSpace) -> Result<(), DocStoreError> {
        info!(
            "ensuring collection '{}' with size={} distance={:?}",
            self.collection, space.size, self.distance
        );

        match self.client.collection_info(&self.collection).await {
            Ok(_) => {
                debug!("collection '{}' already exists", self.collection);
                return Ok(());
            }
            Err(err) => {
                warn!(
                    "collection '{}' not found, will be created (error={})",
                    self.collection, err
                );
            }
        }

        let distance = match self.distance {
            DistanceKind::Cosine => Distance::Cosine,
            DistanceKind::Dot => Distance::Dot,
            DistanceKind::Euclid => Distance::Euclid,
        };

        self.client
            .create_collection(
                CreateCollectionBuilder::new(&self.collection)
                    .vectors_config(VectorParamsBuilder::new(space.size as u64, distance)),
            )
            .await
            .map_err(|e| DocStoreError::Qdrant(e.to_string()))?;

        info!("collection '{}' created", self.collection);
        Ok(())
    }

    /// Upserts (inserts or updates) a batch of points. Returns how many
    /// points were sent.
    pub async fn upsert_points(&self, points: Vec<PointStruct>) -> Result<usize, DocStoreError> {
        if points.is_empty() {
            debug!("no points provided for upsert");
            return Ok(0);
        }

        let count = points.len();
        info!("upserting {count} points into '{}'", self.collection);

        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection, points))
            .await
            .map_err(|e| DocStoreError::Qdrant(e.to_string()))?;

        Ok(count)
    }

    /// Similarity search returning `(score, payload)` pairs sorted by
    /// descending score.
    pub async fn search(
        &self,
        vector: Vec<f32>,
        limit: u64,
    ) -> Result<Vec<(f32, serde_json::Value)>, DocStoreError> {
        debug!("searching '{}' with limit={limit}", self.collection);

        let builder =
            SearchPointsBuilder::new(&self.collection, vector, limit).with_payload(true);

        let res = self
            .client
            .search_points(builder)
            .await
            .map_err(|e| DocStoreError::Qdrant(e.to_string()))?;

        let mut out = Vec::with_capacity(res.result.len());
        for r in res.result.into_iter() {
            let score = r.score;
            let payload_json = qpayload_to_json(r.payload);
            out.push((score, payload_json));
        }

        debug!("search completed: {} hits returned", out.len());
        Ok(out)
    }
}

/// Converts a Qdrant payload (`HashMap<String, qdrant::Value>`) into JSON.
///
/// This corpus stores flat string payloads; unsupported nested types map
/// to `Null`.
fn qpayload_to_json(mut p: std::collections::HashMap<String, QValue>) -> serde_json::Value {
    use qdrant_client::qdrant::value::Kind as K;
    let mut m = serde_json::Map::new();
    for (k, v) in p.drain() {
        let j = match v.kind {
            Some(K::StringValue(s)) => serde_json::Value::String(s),
            Some(K::IntegerValue(i)) => serde_json::Value::Number(i.into()),
            Some(K::DoubleValue(f)) => serde_json::json!(f),
            Some(K::BoolValue(b)) => serde_json::Value::Bool(b),
            None => serde_json::Value::Null,
            _ => serde_json::Value::Null,
        };
        m.insert(k, j);
    }
    serde_json::Value::Object(m)
}

//! ChromaDB HTTP client.
//!
//! Thin wrapper over Chroma's v1 REST API. Responsibilities: keep a single
//! HTTP client per process, guarantee the collection exists, and run scored
//! similarity searches whose failures all surface as unavailability rather
//! than aborting with transport details.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::{ChromaConfig, RetrievalConfig};
use crate::embeddings::EmbeddingProvider;
use crate::error::{Result, SibylError};
use crate::models::{CandidateChunk, Metadata};
use crate::vector::SimilaritySearch;

#[derive(Debug, Deserialize)]
struct CollectionInfo {
    id: String,
}

/// Wire shape of `POST /api/v1/collections/{id}/query`. Chroma nests one
/// result list per query embedding; this service always sends exactly one.
#[derive(Debug, Default, Deserialize)]
struct QueryPayload {
    #[serde(default)]
    ids: Vec<Vec<String>>,
    #[serde(default)]
    documents: Vec<Vec<Option<String>>>,
    #[serde(default)]
    metadatas: Vec<Vec<Option<Metadata>>>,
    #[serde(default)]
    distances: Vec<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
struct Heartbeat {
    #[serde(rename = "nanosecond heartbeat")]
    nanosecond_heartbeat: u64,
}

#[derive(Clone)]
pub struct ChromaStore {
    http: reqwest::Client,
    base_url: String,
    collection_id: String,
    embeddings: EmbeddingProvider,
    max_k: usize,
}

impl ChromaStore {
    /// Connect to Chroma and ensure the configured collection exists.
    ///
    /// Collection creation is idempotent and pins cosine distance, which
    /// the score normalization downstream assumes.
    pub async fn connect(
        config: &ChromaConfig,
        retrieval: &RetrievalConfig,
        embeddings: EmbeddingProvider,
    ) -> Result<Self> {
        let base_url = format!("http://{}:{}", config.host, config.port);
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(unavailable)?;

        tracing::info!(
            host = %config.host,
            port = config.port,
            collection = %config.collection,
            "Initializing Chroma client"
        );

        let collection: CollectionInfo = http
            .post(format!("{base_url}/api/v1/collections"))
            .json(&json!({
                "name": config.collection,
                "get_or_create": true,
                "metadata": { "hnsw:space": "cosine" },
            }))
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .json()
            .await
            .map_err(unavailable)?;

        Ok(Self {
            http,
            base_url,
            collection_id: collection.id,
            embeddings,
            max_k: retrieval.max_k,
        })
    }

    /// Ids already present in the collection. Used by the seeder to keep
    /// inserts idempotent.
    pub async fn existing_ids(&self) -> Result<Vec<String>> {
        #[derive(Deserialize)]
        struct GetPayload {
            #[serde(default)]
            ids: Vec<String>,
        }

        let payload: GetPayload = self
            .http
            .post(format!(
                "{}/api/v1/collections/{}/get",
                self.base_url, self.collection_id
            ))
            .json(&json!({ "include": [] }))
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .json()
            .await
            .map_err(unavailable)?;

        Ok(payload.ids)
    }

    /// Embed and insert documents. Callers are responsible for id dedup.
    pub async fn add_documents(
        &self,
        ids: Vec<String>,
        texts: Vec<String>,
        metadatas: Vec<Metadata>,
    ) -> Result<()> {
        let embeddings = self.embeddings.embed(texts.clone()).await?;

        self.http
            .post(format!(
                "{}/api/v1/collections/{}/add",
                self.base_url, self.collection_id
            ))
            .json(&json!({
                "ids": ids,
                "embeddings": embeddings,
                "documents": texts,
                "metadatas": metadatas,
            }))
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?;

        Ok(())
    }
}

#[async_trait]
impl SimilaritySearch for ChromaStore {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<CandidateChunk>> {
        let n_results = limit.clamp(1, self.max_k);

        tracing::debug!(n_results, "Running Chroma similarity search");

        let embedding = self.embeddings.embed_one(query).await?;

        let payload: QueryPayload = self
            .http
            .post(format!(
                "{}/api/v1/collections/{}/query",
                self.base_url, self.collection_id
            ))
            .json(&json!({
                "query_embeddings": [embedding],
                "n_results": n_results,
                "include": ["documents", "metadatas", "distances"],
            }))
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .json()
            .await
            .map_err(unavailable)?;

        let candidates = decode_query_payload(payload);
        tracing::debug!(count = candidates.len(), "Chroma search returned candidates");

        Ok(candidates)
    }

    async fn heartbeat(&self) -> Result<u64> {
        let beat: Heartbeat = self
            .http
            .get(format!("{}/api/v1/heartbeat", self.base_url))
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .json()
            .await
            .map_err(unavailable)?;

        tracing::debug!(heartbeat = beat.nanosecond_heartbeat, "Chroma heartbeat");
        Ok(beat.nanosecond_heartbeat)
    }
}

fn unavailable(err: reqwest::Error) -> SibylError {
    SibylError::VectorStoreUnavailable(err.to_string())
}

/// Flatten Chroma's per-query nested arrays into candidates.
///
/// Decoding is total: a row missing its document text, metadata or distance
/// becomes a candidate with empty text, empty metadata or zero distance, so
/// one malformed entry never aborts the whole request.
fn decode_query_payload(payload: QueryPayload) -> Vec<CandidateChunk> {
    let ids = payload.ids.into_iter().next().unwrap_or_default();
    let mut documents = payload.documents.into_iter().next().unwrap_or_default();
    let mut metadatas = payload.metadatas.into_iter().next().unwrap_or_default();
    let distances = payload.distances.into_iter().next().unwrap_or_default();

    ids.into_iter()
        .enumerate()
        .map(|(idx, id)| CandidateChunk {
            id,
            text: documents
                .get_mut(idx)
                .and_then(|doc| doc.take())
                .unwrap_or_default(),
            raw_distance: distances.get(idx).copied().unwrap_or(0.0),
            metadata: metadatas
                .get_mut(idx)
                .and_then(|meta| meta.take())
                .unwrap_or_default(),
        })
        .collect()
}

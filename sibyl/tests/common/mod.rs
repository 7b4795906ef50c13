#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use sibyl::config::{ChromaConfig, Config, EmbeddingsConfig, RetrievalConfig, ServerConfig};
use sibyl::error::{Result, SibylError};
use sibyl::models::{CandidateChunk, Metadata};
use sibyl::vector::SimilaritySearch;

/// Stub vector store serving canned candidates and recording the limit the
/// orchestrator asked for.
pub struct StubStore {
    candidates: Vec<CandidateChunk>,
    fail: bool,
    pub last_limit: Mutex<Option<usize>>,
}

impl StubStore {
    pub fn returning(candidates: Vec<CandidateChunk>) -> Self {
        Self {
            candidates,
            fail: false,
            last_limit: Mutex::new(None),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            candidates: Vec::new(),
            fail: true,
            last_limit: Mutex::new(None),
        }
    }
}

#[async_trait]
impl SimilaritySearch for StubStore {
    async fn search(&self, _query: &str, limit: usize) -> Result<Vec<CandidateChunk>> {
        *self.last_limit.lock().unwrap() = Some(limit);
        if self.fail {
            return Err(SibylError::VectorStoreUnavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(self.candidates.iter().take(limit).cloned().collect())
    }

    async fn heartbeat(&self) -> Result<u64> {
        if self.fail {
            return Err(SibylError::VectorStoreUnavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(42)
    }
}

pub fn candidate(id: &str, text: &str, raw_distance: f32) -> CandidateChunk {
    CandidateChunk {
        id: id.to_string(),
        text: text.to_string(),
        raw_distance,
        metadata: Metadata::new(),
    }
}

pub fn candidate_with_source(
    id: &str,
    text: &str,
    raw_distance: f32,
    source: &str,
) -> CandidateChunk {
    CandidateChunk {
        id: id.to_string(),
        text: text.to_string(),
        raw_distance,
        metadata: Metadata::from([("source".to_string(), json!(source))]),
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        chroma: ChromaConfig {
            host: "localhost".to_string(),
            port: 8000,
            collection: "test_knowledge".to_string(),
            timeout_secs: 2,
        },
        embeddings: EmbeddingsConfig {
            model: "BAAI/bge-small-en-v1.5".to_string(),
            batch_size: 32,
        },
        retrieval: RetrievalConfig {
            default_top_k: 8,
            max_k: 12,
            min_score: 0.3,
            max_context_chars: 6000,
        },
    }
}

//! Local text embeddings.
//!
//! Chroma's HTTP API accepts only precomputed embeddings, so query and
//! passage text is embedded in-process with fastembed. The model is loaded
//! once per process and shared; encoding runs on the blocking pool.

use std::sync::{Arc, Mutex};

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::config::EmbeddingsConfig;
use crate::error::{Result, SibylError};

#[derive(Clone)]
pub struct EmbeddingProvider {
    model: Arc<Mutex<TextEmbedding>>,
    batch_size: usize,
}

impl EmbeddingProvider {
    pub fn new(config: &EmbeddingsConfig) -> Result<Self> {
        let model_kind = resolve_embedding_model(&config.model);
        let model = TextEmbedding::try_new(
            InitOptions::new(model_kind).with_show_download_progress(false),
        )
        .map_err(|e| SibylError::Embedding(e.to_string()))?;

        Ok(Self {
            model: Arc::new(Mutex::new(model)),
            batch_size: config.batch_size,
        })
    }

    pub async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let model = Arc::clone(&self.model);
        let batch_size = self.batch_size;
        tokio::task::spawn_blocking(move || {
            let mut model = model.lock().map_err(|e| {
                SibylError::Embedding(format!("Embedding model lock poisoned: {e}"))
            })?;
            model
                .embed(texts, Some(batch_size))
                .map_err(|e| SibylError::Embedding(e.to_string()))
        })
        .await
        .map_err(|e| SibylError::Embedding(format!("Embedding worker failed: {e}")))?
    }

    pub async fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        let embeddings = self.embed(vec![text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| SibylError::Embedding("No embedding generated".to_string()))
    }
}

/// Map a configured model name onto a fastembed model, defaulting with a
/// warning when the name is unknown.
fn resolve_embedding_model(name: &str) -> EmbeddingModel {
    match name {
        "BAAI/bge-small-en-v1.5" => EmbeddingModel::BGESmallENV15,
        "BAAI/bge-base-en-v1.5" => EmbeddingModel::BGEBaseENV15,
        "BAAI/bge-large-en-v1.5" => EmbeddingModel::BGELargeENV15,
        "sentence-transformers/all-MiniLM-L6-v2" => EmbeddingModel::AllMiniLML6V2,
        other => {
            tracing::warn!(
                "Unknown embedding model '{}', using BAAI/bge-small-en-v1.5",
                other
            );
            EmbeddingModel::BGESmallENV15
        }
    }
}

use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub chroma: ChromaConfig,
    pub embeddings: EmbeddingsConfig,
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChromaConfig {
    pub host: String,
    pub port: u16,
    pub collection: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingsConfig {
    pub model: String,
    pub batch_size: usize,
}

/// Retrieval tuning knobs consumed by the query pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    /// Candidate count requested from the store when the caller does not ask
    /// for more.
    pub default_top_k: usize,
    /// Hard cap on the candidate count sent to the store.
    pub max_k: usize,
    /// Minimum similarity score (0-1) required to keep a chunk. Chunks
    /// scoring below this are discarded as noise.
    pub min_score: f32,
    /// Upper bound on the combined character count of context chunks used
    /// for one answer.
    pub max_context_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("SIBYL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("SIBYL_PORT", 8080),
            },
            chroma: ChromaConfig {
                host: env::var("CHROMA_HOST").unwrap_or_else(|_| "chroma".to_string()),
                port: parse_env_or("CHROMA_PORT", 8000),
                collection: env::var("CHROMA_COLLECTION")
                    .unwrap_or_else(|_| "sibyl_knowledge".to_string()),
                timeout_secs: parse_env_or("CHROMA_TIMEOUT", 10),
            },
            embeddings: EmbeddingsConfig {
                model: env::var("EMBEDDING_MODEL")
                    .unwrap_or_else(|_| "BAAI/bge-small-en-v1.5".to_string()),
                batch_size: parse_env_or("EMBEDDING_BATCH_SIZE", 256),
            },
            retrieval: RetrievalConfig {
                default_top_k: parse_env_or("RETRIEVAL_DEFAULT_TOP_K", 8),
                max_k: parse_env_or("RETRIEVAL_MAX_K", 12),
                min_score: parse_env_or("RETRIEVAL_MIN_SCORE", 0.3),
                max_context_chars: parse_env_or("MAX_CONTEXT_CHARACTERS", 6000),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

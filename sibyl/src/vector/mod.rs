//! Similarity search over the vector store.

mod chroma;

pub use chroma::ChromaStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::CandidateChunk;

/// Read-only similarity search over the vector store.
///
/// The query orchestrator takes this as a trait object so the transport can
/// be swapped out (and stubbed in tests). Implementations return candidates
/// ordered ascending by raw distance and surface every transport failure as
/// [`crate::error::SibylError::VectorStoreUnavailable`].
#[async_trait]
pub trait SimilaritySearch: Send + Sync {
    /// Run a similarity search, returning at most `limit` candidates.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<CandidateChunk>>;

    /// The store's heartbeat value, or an unavailability error.
    async fn heartbeat(&self) -> Result<u64>;
}

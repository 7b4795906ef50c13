//! Query request/response DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::models::{Metadata, QueryResult, SelectedChunk};

/// Request body for `POST /v1/query`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// The natural-language question to answer.
    pub question: String,
    /// Maximum number of context chunks to cite. If omitted, the service
    /// default is used.
    pub max_sources: Option<u32>,
}

/// A retrieved chunk used as context for an answer.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceChunk {
    /// Chunk id in the vector store.
    pub id: String,
    /// Stable 1-based index used in the answer's Sources section.
    pub citation_id: u32,
    /// Similarity score in `[0, 1]`, higher is more relevant.
    pub score: f32,
    /// Logical source label (e.g. file path or URL), when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Rank position after selection.
    pub rank: u32,
    /// Full text content of the chunk.
    pub text: String,
    /// Arbitrary metadata stored alongside the chunk.
    #[schema(value_type = Object)]
    pub metadata: Metadata,
}

impl From<SelectedChunk> for SourceChunk {
    fn from(selected: SelectedChunk) -> Self {
        let source = selected.chunk.source_label();
        Self {
            id: selected.chunk.id,
            citation_id: selected.citation_id,
            score: selected.chunk.score,
            source,
            rank: selected.rank,
            text: selected.chunk.text,
            metadata: selected.chunk.metadata,
        }
    }
}

/// Response body for `POST /v1/query`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    /// Natural-language answer text, including a Sources section.
    pub answer: String,
    /// Chunks backing the answer, in citation order.
    pub sources: Vec<SourceChunk>,
}

impl From<QueryResult> for QueryResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            answer: result.answer,
            sources: result.sources.into_iter().map(SourceChunk::from).collect(),
        }
    }
}

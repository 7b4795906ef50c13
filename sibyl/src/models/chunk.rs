use serde_json::Value;

use super::Metadata;

/// A raw candidate returned by the similarity search, before score
/// normalization. `raw_distance` is in provider units (cosine distance for
/// collections this service creates).
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateChunk {
    pub id: String,
    pub text: String,
    pub raw_distance: f32,
    pub metadata: Metadata,
}

/// A candidate whose raw distance has been normalized into a similarity
/// score in `[0, 1]`, higher is more relevant.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    pub id: String,
    pub text: String,
    pub score: f32,
    pub metadata: Metadata,
}

impl ScoredChunk {
    /// Human-readable source label, preferring the `source` metadata key
    /// and falling back to `file_name`. Non-string and empty values are
    /// treated as absent.
    pub fn source_label(&self) -> Option<String> {
        for key in ["source", "file_name"] {
            if let Some(Value::String(s)) = self.metadata.get(key) {
                if !s.is_empty() {
                    return Some(s.clone());
                }
            }
        }
        None
    }
}

/// A scored chunk that survived selection, with its final position and the
/// citation id referenced from the answer text. Rank and citation id are
/// equal by construction and assigned once per query.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedChunk {
    pub rank: u32,
    pub citation_id: u32,
    pub chunk: ScoredChunk,
}

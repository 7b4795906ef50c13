use crate::models::{CandidateChunk, ScoredChunk};

/// Convert a raw distance into a similarity score in `[0, 1]`.
///
/// Cosine distances live in `[0, 2]` where 0 means identical, so the score
/// is `1 - d/2`. Out-of-range input is clamped rather than rejected, which
/// keeps the rest of the pipeline numerically closed over `[0, 1]` no
/// matter what distance metric the store reports.
pub fn similarity_from_distance(raw_distance: f32) -> f32 {
    if raw_distance.is_nan() {
        return 0.0;
    }
    (1.0 - raw_distance / 2.0).clamp(0.0, 1.0)
}

/// Normalize a batch of candidates into scored chunks, preserving order.
pub fn score_candidates(candidates: Vec<CandidateChunk>) -> Vec<ScoredChunk> {
    candidates
        .into_iter()
        .map(|candidate| ScoredChunk {
            id: candidate.id,
            text: candidate.text,
            score: similarity_from_distance(candidate.raw_distance),
            metadata: candidate.metadata,
        })
        .collect()
}

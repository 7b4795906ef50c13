use crate::models::ScoredChunk;

/// Limits applied while selecting context chunks.
#[derive(Debug, Clone, Copy)]
pub struct SelectionLimits {
    /// Maximum number of chunks to keep.
    pub max_count: usize,
    /// Minimum similarity score required to keep a chunk.
    pub min_score: f32,
    /// Upper bound on the combined character count of kept chunk text.
    pub max_total_chars: usize,
}

/// Filter, rank and trim scored chunks.
///
/// Chunks scoring below `min_score` are discarded, the remainder is ordered
/// by descending score (equal scores keep the provider's distance-ascending
/// order), and the ordered list is walked greedily: a chunk is accepted
/// while the count cap holds and its text fits the remaining character
/// budget. A chunk that would overflow the budget is skipped, not swapped;
/// scanning continues so a shorter, lower-scored chunk can still be
/// accepted afterwards.
pub fn select_chunks(chunks: Vec<ScoredChunk>, limits: SelectionLimits) -> Vec<ScoredChunk> {
    let before = chunks.len();

    let mut filtered: Vec<ScoredChunk> = chunks
        .into_iter()
        .filter(|chunk| chunk.score >= limits.min_score)
        .collect();

    // sort_by is stable, which is what keeps tie order deterministic.
    filtered.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    tracing::debug!(
        before,
        after = filtered.len(),
        min_score = limits.min_score,
        "Filtered chunks by score"
    );

    let mut selected: Vec<ScoredChunk> = Vec::new();
    let mut total_chars = 0usize;

    for chunk in filtered {
        if selected.len() >= limits.max_count {
            break;
        }

        let chunk_chars = chunk.text.chars().count();
        if total_chars + chunk_chars > limits.max_total_chars {
            tracing::debug!(chunk_id = %chunk.id, "Skipping chunk due to context size limit");
            continue;
        }

        total_chars += chunk_chars;
        selected.push(chunk);
    }

    tracing::info!(
        count = selected.len(),
        total_context_chars = total_chars,
        "Selected chunks for context"
    );

    selected
}

//! Query orchestration.
//!
//! One request flows retrieve → score → select → cite → compose. A provider
//! failure is propagated to the caller untouched, with no retry and no
//! fallback answer. All chunk state is owned here for the duration of one
//! request and dropped with the response.

use std::sync::Arc;

use crate::config::RetrievalConfig;
use crate::error::{Result, SibylError};
use crate::models::{AnswerRequest, QueryResult};
use crate::rag::{
    assign_citations, compose_answer, score_candidates, select_chunks, SelectionLimits,
    NO_KNOWLEDGE_ANSWER,
};
use crate::vector::SimilaritySearch;

#[derive(Clone)]
pub struct RagService {
    store: Arc<dyn SimilaritySearch>,
    retrieval: RetrievalConfig,
}

impl RagService {
    pub fn new(store: Arc<dyn SimilaritySearch>, retrieval: RetrievalConfig) -> Self {
        Self { store, retrieval }
    }

    /// Answer one question with retrieved, cited context.
    pub async fn answer(&self, req: AnswerRequest) -> Result<QueryResult> {
        let question = req.question.trim();
        if question.is_empty() {
            return Err(SibylError::Validation(
                "Question must not be empty".to_string(),
            ));
        }

        let max_sources = req.max_sources.unwrap_or(self.retrieval.default_top_k);
        if max_sources == 0 {
            return Err(SibylError::Validation(
                "maxSources must be at least 1".to_string(),
            ));
        }

        tracing::info!(
            question = %preview(question, 120),
            max_sources,
            "Answering question"
        );

        // Always request at least the default top-k so selection has enough
        // headroom to filter by score and budget.
        let candidate_limit = max_sources.max(self.retrieval.default_top_k);
        let candidates = self.store.search(question, candidate_limit).await?;

        if candidates.is_empty() {
            tracing::info!("Search returned no candidates");
            return Ok(QueryResult {
                answer: NO_KNOWLEDGE_ANSWER.to_string(),
                sources: Vec::new(),
            });
        }

        let scored = score_candidates(candidates);
        let selected = select_chunks(
            scored,
            SelectionLimits {
                max_count: max_sources,
                min_score: self.retrieval.min_score,
                max_total_chars: self.retrieval.max_context_chars,
            },
        );
        let sources = assign_citations(selected);
        let answer = compose_answer(question, &sources);

        Ok(QueryResult { answer, sources })
    }
}

/// Bounded question preview for log fields.
fn preview(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(width.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}

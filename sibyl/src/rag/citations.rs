use crate::models::{ScoredChunk, SelectedChunk};

/// Assign 1-based ranks and citation ids in selection order.
///
/// Both values are the chunk's position in the input; the ids are
/// contiguous, never reordered and never reused within a query, so the
/// answer text and the structured source list can reference the same
/// numbers.
pub fn assign_citations(chunks: Vec<ScoredChunk>) -> Vec<SelectedChunk> {
    chunks
        .into_iter()
        .enumerate()
        .map(|(idx, chunk)| SelectedChunk {
            rank: idx as u32 + 1,
            citation_id: idx as u32 + 1,
            chunk,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Metadata;

    fn chunk(id: &str) -> ScoredChunk {
        ScoredChunk {
            id: id.to_string(),
            text: "text".to_string(),
            score: 0.5,
            metadata: Metadata::new(),
        }
    }

    #[test]
    fn ids_are_contiguous_from_one() {
        let selected = assign_citations(vec![chunk("a"), chunk("b"), chunk("c")]);

        let ids: Vec<u32> = selected.iter().map(|s| s.citation_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn rank_equals_citation_id() {
        let selected = assign_citations(vec![chunk("a"), chunk("b")]);
        for entry in &selected {
            assert_eq!(entry.rank, entry.citation_id);
        }
    }

    #[test]
    fn input_order_is_preserved() {
        let selected = assign_citations(vec![chunk("x"), chunk("y")]);
        assert_eq!(selected[0].chunk.id, "x");
        assert_eq!(selected[1].chunk.id, "y");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(assign_citations(Vec::new()).is_empty());
    }

    #[test]
    fn assignment_is_idempotent_for_same_input() {
        let first = assign_citations(vec![chunk("a"), chunk("b")]);
        let second = assign_citations(vec![chunk("a"), chunk("b")]);
        assert_eq!(first, second);
    }
}

//! Deterministic answer composition.
//!
//! A deployment with a language model would synthesize prose here. This
//! composer instead renders a fixed-shape narrative over the selected
//! chunks so answers stay reproducible and auditable. The Sources section
//! is the contract: one bracketed citation id per selected chunk, in
//! citation order, matching the structured source list.

use crate::models::SelectedChunk;

/// Display width, in characters, for one source line in the answer text.
const SNIPPET_WIDTH: usize = 260;

/// Answer returned when retrieval produced nothing usable.
pub const NO_KNOWLEDGE_ANSWER: &str = "I could not find any relevant content in the \
knowledge base to answer this question. If the topic is important, please consider \
adding documentation about it to the knowledge corpus.";

/// Build the user-facing answer text for one query.
pub fn compose_answer(question: &str, selected: &[SelectedChunk]) -> String {
    if selected.is_empty() {
        return NO_KNOWLEDGE_ANSWER.to_string();
    }

    let narrative = if selected.len() == 1 {
        "The passage cited below is the closest match to this question in the knowledge \
         base. It covers what the indexed documentation records about the topic; passages \
         scoring below the configured relevance threshold were excluded to keep the \
         context focused."
            .to_string()
    } else {
        format!(
            "The {} passages cited below are the closest matches to this question in the \
             knowledge base, ordered by similarity. Together they cover what the indexed \
             documentation records about the topic; passages scoring below the configured \
             relevance threshold were excluded to keep the context focused.",
            selected.len()
        )
    };

    let mut sections: Vec<String> = vec![
        format!("Question: {question}"),
        String::new(),
        "Based on the retrieved knowledge base content, here is a synthesized answer:"
            .to_string(),
        String::new(),
        narrative,
        String::new(),
        "Each numbered reference below corresponds to a specific chunk that was retrieved \
         from the knowledge base and used as context. You can use these citations to audit \
         or refine the underlying documentation."
            .to_string(),
        String::new(),
        "Sources:".to_string(),
    ];

    for entry in selected {
        sections.push(source_line(entry));
    }

    sections.join("\n")
}

fn source_line(entry: &SelectedChunk) -> String {
    let snippet = single_line_snippet(&entry.chunk.text, SNIPPET_WIDTH);
    let mut prefix = format!("[{}]", entry.citation_id);
    if let Some(label) = entry.chunk.source_label() {
        prefix.push_str(&format!(" ({label})"));
    }
    format!("{prefix} {snippet}")
}

/// Collapse text onto a single line and bound it to `width` characters,
/// marking truncation with an ellipsis. Truncation counts characters, so a
/// multi-byte character is never split.
fn single_line_snippet(text: &str, width: usize) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() <= width {
        return flattened;
    }

    let mut snippet: String = flattened.chars().take(width.saturating_sub(1)).collect();
    snippet.push('…');
    snippet
}

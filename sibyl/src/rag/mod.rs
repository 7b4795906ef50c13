//! The retrieval-selection-and-citation pipeline.
//!
//! Pure, per-request stages between the vector store and the HTTP surface:
//! score normalization, score/budget-constrained selection, citation
//! assignment and answer composition. No stage holds state or performs IO;
//! concurrent queries share nothing.

mod citations;
mod composer;
mod scoring;
mod selector;

pub use citations::assign_citations;
pub use composer::{compose_answer, NO_KNOWLEDGE_ANSWER};
pub use scoring::{score_candidates, similarity_from_distance};
pub use selector::{select_chunks, SelectionLimits};

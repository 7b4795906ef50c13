//! Sibyl: grounded question answering over a ChromaDB knowledge base.
//!
//! The crate is a thin axum service around a deterministic
//! retrieval-selection-and-citation pipeline: candidates come back from the
//! vector store, are score-normalized, filtered and budgeted, assigned
//! stable citation ids, and rendered into an answer whose Sources section
//! matches the structured source list. See [`rag`] for the pipeline stages
//! and [`services`] for the per-request orchestration.

pub mod api;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod models;
pub mod rag;
pub mod seed;
pub mod services;
pub mod vector;

//! One-time knowledge-base seeding.
//!
//! Connects to Chroma over HTTP and idempotently inserts a small built-in
//! corpus of service documentation. Inserts are skipped for ids that
//! already exist, so the command is safe to run repeatedly, e.g. from a
//! one-shot container started alongside the store. A production loader
//! would ingest real documentation into chunks instead.

use std::collections::HashSet;

use serde_json::json;

use crate::error::Result;
use crate::models::Metadata;
use crate::vector::ChromaStore;

struct SeedDocument {
    id: &'static str,
    text: &'static str,
    source: &'static str,
    topic: &'static str,
}

const SAMPLE_CORPUS: &[SeedDocument] = &[
    SeedDocument {
        id: "answer-design-1",
        text: "Sibyl answers are grounded and auditable by construction. Every answer \
               ends with a Sources section whose bracketed numbers match the citation \
               ids in the structured source list, so reviewers can trace each claim \
               back to the exact chunk that supported it.",
        source: "docs/answers/design.md",
        topic: "answers",
    },
    SeedDocument {
        id: "docker-compose-1",
        text: "The question-answering service is deployed with Docker Compose. The API \
               server, ChromaDB, and a one-shot seeding service are defined as separate \
               services. ChromaDB mounts a named Docker volume at /data to persist \
               vector store state across restarts.",
        source: "docs/deploy/docker-compose.md",
        topic: "docker",
    },
    SeedDocument {
        id: "retrieval-config-1",
        text: "Retrieval configuration includes the number of results (top_k) requested \
               from ChromaDB, a minimum similarity score, and a context character \
               budget. Increasing top_k and enforcing a minimum score helps answer \
               complex questions with enough relevant context while avoiding unrelated \
               noise.",
        source: "docs/retrieval/configuration.md",
        topic: "retrieval",
    },
    SeedDocument {
        id: "observability-1",
        text: "Production deployments should expose the health endpoint, structured \
               logging with request ids, and latency figures for retrieval. This helps \
               engineering teams debug connectivity issues with ChromaDB without \
               attaching a debugger to the service.",
        source: "docs/ops/observability.md",
        topic: "ops",
    },
];

/// Insert any sample documents that are not yet present in the collection.
pub async fn run(store: &ChromaStore) -> Result<()> {
    let existing: HashSet<String> = store.existing_ids().await?.into_iter().collect();

    let pending: Vec<&SeedDocument> = SAMPLE_CORPUS
        .iter()
        .filter(|doc| !existing.contains(doc.id))
        .collect();

    if pending.is_empty() {
        tracing::info!("Collection already contains all sample documents; nothing to do");
        return Ok(());
    }

    tracing::info!(count = pending.len(), "Adding new documents to Chroma");

    let ids = pending.iter().map(|doc| doc.id.to_string()).collect();
    let texts = pending.iter().map(|doc| doc.text.to_string()).collect();
    let metadatas = pending
        .iter()
        .map(|doc| {
            Metadata::from([
                ("source".to_string(), json!(doc.source)),
                ("topic".to_string(), json!(doc.topic)),
            ])
        })
        .collect();

    store.add_documents(ids, texts, metadatas).await?;

    tracing::info!("Seeding completed successfully");
    Ok(())
}

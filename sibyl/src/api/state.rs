use std::sync::Arc;

use crate::config::Config;
use crate::services::RagService;
use crate::vector::SimilaritySearch;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Shared, read-only handle to the vector store; one search per query.
    pub store: Arc<dyn SimilaritySearch>,
    pub rag: RagService,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn SimilaritySearch>) -> Self {
        let config = Arc::new(config);
        let rag = RagService::new(store.clone(), config.retrieval.clone());

        Self { config, store, rag }
    }
}

mod rag;

pub use rag::RagService;

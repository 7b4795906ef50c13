use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sibyl API",
        version = "1.0.0",
        description = "Grounded question answering over a ChromaDB knowledge base. \
                       Answers are deterministic and carry numbered citations back \
                       to the retrieved chunks.",
    ),
    paths(
        handlers::health::health_check,
        handlers::query::answer_query,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Query
        dto::query::QueryRequest,
        dto::query::QueryResponse,
        dto::query::SourceChunk,
        // Health
        handlers::health::HealthData,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "query", description = "Question answering with cited sources"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}

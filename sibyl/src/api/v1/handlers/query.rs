//! v1 query handler.
//!
//! Implements `POST /api/v1/query`: answer a natural-language question with
//! retrieved, cited context from the vector store.

use axum::extract::State;

use crate::api::v1::dto::{QueryRequest, QueryResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::models::AnswerRequest;

/// `POST /api/v1/query`
///
/// The response includes:
/// - `answer`: natural language answer text
/// - `sources`: the retrieved chunks with scores and metadata
///
/// The answer text contains a human-readable "Sources" section that
/// references the same citation ids as the structured source list.
#[utoipa::path(
    post,
    path = "/api/v1/query",
    tag = "query",
    operation_id = "query.answer",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "Grounded answer with citations", body = QueryResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 503, description = "Vector store unavailable", body = ApiError),
    )
)]
pub async fn answer_query(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<QueryRequest>,
) -> ApiResponse<QueryResponse> {
    let internal = AnswerRequest {
        question: req.question,
        max_sources: req.max_sources.map(|n| n as usize),
    };

    match state.rag.answer(internal).await {
        Ok(result) => ApiResponse::success(QueryResponse::from(result)),
        Err(e) => ApiResponse::from(e),
    }
}

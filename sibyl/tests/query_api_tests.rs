//! End-to-end router tests with a stub vector store.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{candidate, candidate_with_source, test_config, StubStore};
use sibyl::api::{create_router, AppState};
use sibyl::rag::NO_KNOWLEDGE_ANSWER;
use sibyl::vector::SimilaritySearch;

fn build_app(store: StubStore) -> axum::Router {
    let store: Arc<dyn SimilaritySearch> = Arc::new(store);
    create_router(AppState::new(test_config(), store))
}

fn query_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/query")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn query_returns_grounded_answer_with_sources() {
    let app = build_app(StubStore::returning(vec![
        candidate_with_source("a", "compose file with a /data volume", 0.1, "docs/deploy.md"),
        candidate("b", "retrieval tuning notes", 0.5),
    ]));

    let response = app
        .oneshot(query_request(
            json!({ "question": "how is it deployed?", "maxSources": 5 }),
        ))
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("error").is_none());

    let answer = body["data"]["answer"].as_str().unwrap();
    assert!(answer.contains("Sources:"));
    assert!(answer.contains("[1] (docs/deploy.md)"));

    let sources = body["data"]["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0]["id"], "a");
    assert_eq!(sources[0]["citationId"], 1);
    assert_eq!(sources[0]["rank"], 1);
    assert_eq!(sources[0]["source"], "docs/deploy.md");
    assert_eq!(sources[1]["citationId"], 2);
    assert!(sources[1].get("source").is_none());

    let score = sources[0]["score"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&score));
}

#[tokio::test]
async fn empty_question_returns_invalid_request() {
    let app = build_app(StubStore::returning(Vec::new()));

    let response = app
        .oneshot(query_request(json!({ "question": "   " })))
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn zero_max_sources_returns_invalid_request() {
    let app = build_app(StubStore::returning(Vec::new()));

    let response = app
        .oneshot(query_request(
            json!({ "question": "valid", "maxSources": 0 }),
        ))
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn unavailable_store_returns_503_envelope() {
    let app = build_app(StubStore::unavailable());

    let response = app
        .oneshot(query_request(json!({ "question": "is the store up?" })))
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "unavailable");
    assert!(body.get("data").is_none());

    // Transport details stay in the logs, not the response.
    let message = body["error"]["message"].as_str().unwrap();
    assert!(!message.contains("connection refused"));
}

#[tokio::test]
async fn no_candidates_returns_no_knowledge_answer() {
    let app = build_app(StubStore::returning(Vec::new()));

    let response = app
        .oneshot(query_request(json!({ "question": "anything?" })))
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["answer"], NO_KNOWLEDGE_ANSWER);
    assert_eq!(body["data"]["sources"], json!([]));
}

#[tokio::test]
async fn health_reports_ok_with_heartbeat() {
    let app = build_app(StubStore::returning(Vec::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["chromaHeartbeat"], 42);
}

#[tokio::test]
async fn health_reports_unavailable_store_as_503() {
    let app = build_app(StubStore::unavailable());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "unavailable");
}

#[tokio::test]
async fn provided_request_id_is_echoed() {
    let app = build_app(StubStore::returning(Vec::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header("x-request-id", "trace-me-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok());
    assert_eq!(request_id, Some("trace-me-123"));
}

#[tokio::test]
async fn missing_request_id_is_generated() {
    let app = build_app(StubStore::returning(Vec::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn openapi_spec_is_served() {
    let app = build_app(StubStore::returning(Vec::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("openapi").is_some());
    assert!(body["paths"].get("/api/v1/query").is_some());
}

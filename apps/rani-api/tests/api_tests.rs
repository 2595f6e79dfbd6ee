//! In-process API tests
//!
//! Drives the router with `tower::ServiceExt::oneshot` against a fake
//! provider, so no network is involved.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use rani_api::state::AppState;
use rani_core::embeddings::{Embedder, TaskKind, EMBEDDING_DIM};
use rani_core::error::{EmbedError, GenerateError};
use rani_core::generate::Generator;
use rani_core::{ChatEngine, CorpusIndex, RaniConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Provider with deterministic embeddings and a canned reply
struct FakeProvider;

#[async_trait]
impl Embedder for FakeProvider {
    async fn embed(&self, text: &str, _task: TaskKind) -> Result<Vec<f32>, EmbedError> {
        let axis = text.len() % EMBEDDING_DIM;
        let mut v = vec![0.0; EMBEDDING_DIM];
        v[axis] = 1.0;
        Ok(v)
    }
}

#[async_trait]
impl Generator for FakeProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _temperature: f32,
        _max_output_tokens: u32,
    ) -> Result<String, GenerateError> {
        Ok("Terima kasih atas pertanyaannya!".to_string())
    }
}

async fn test_router() -> axum::Router {
    let provider = Arc::new(FakeProvider);
    let paragraphs = vec![
        "Pengadilan Agama Medan melayani perkara perdata agama.".to_string(),
        "Jam operasional adalah 08.00-16.30 WIB.".to_string(),
    ];
    let index = CorpusIndex::build(provider.as_ref(), paragraphs)
        .await
        .unwrap();
    let config = RaniConfig::new("test-key", "sumber.txt");
    let engine = ChatEngine::new(provider, Arc::new(index), &config);
    rani_api::router(Arc::new(AppState::with_engine(engine)))
}

async fn post_json(router: axum::Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/rani")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn missing_field_is_400_with_error() {
    let (status, body) = post_json(test_router().await, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn blank_question_is_400_with_error() {
    let (status, body) = post_json(test_router().await, json!({ "pertanyaan": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn valid_question_returns_all_four_fields() {
    let (status, body) = post_json(test_router().await, json!({ "pertanyaan": "Halo" })).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["pertanyaan"], "Halo");
    assert_eq!(body["jawaban"], "Terima kasih atas pertanyaannya!");
    assert!(body["konteks"].as_str().unwrap().chars().count() <= 1000);
    assert!(body.get("timestamp").is_some());
}

#[tokio::test]
async fn question_is_trimmed_in_response() {
    let (status, body) =
        post_json(test_router().await, json!({ "pertanyaan": "  jam buka?  " })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pertanyaan"], "jam buka?");
}

#[tokio::test]
async fn health_reports_corpus_size() {
    let response = test_router()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["paragraf"], 2);
}

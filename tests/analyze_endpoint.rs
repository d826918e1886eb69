//! Integration tests for the scoring service router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use sentimeter::analyzer::Lexicon;
use sentimeter::server::{create_router, AppState, ServerConfig};
use sentimeter::SentimentIntensityAnalyzer;

fn app() -> Router {
    app_with(SentimentIntensityAnalyzer::new())
}

fn app_with(analyzer: SentimentIntensityAnalyzer) -> Router {
    let state = Arc::new(AppState::new(analyzer));
    create_router(state, &ServerConfig::default()).unwrap()
}

async fn post_analyze(app: Router, body: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn analyze_returns_one_record_per_input_in_order() {
    let texts = [
        "I love this product! It's amazing!",
        "This is okay, but could be better.",
        "I'm really disappointed with the quality.",
        "The customer service was excellent!",
        "I'm not sure how I feel about this.",
    ];
    let (status, body) = post_analyze(app(), json!({ "texts": texts })).await;
    assert_eq!(status, StatusCode::OK);

    let records: Value = serde_json::from_slice(&body).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), texts.len());
    for (record, text) in records.iter().zip(&texts) {
        assert_eq!(record["text"], *text);
        let sentiment = &record["sentiment"];
        let sum = sentiment["neg"].as_f64().unwrap()
            + sentiment["neu"].as_f64().unwrap()
            + sentiment["pos"].as_f64().unwrap();
        assert!((sum - 1.0).abs() < 5e-3, "components sum to {sum}");
        let compound = sentiment["compound"].as_f64().unwrap();
        assert!((-1.0..=1.0).contains(&compound));
    }

    assert!(records[0]["sentiment"]["compound"].as_f64().unwrap() > 0.0);
    assert!(records[2]["sentiment"]["compound"].as_f64().unwrap() < 0.0);
}

#[tokio::test]
async fn analyze_empty_batch_returns_empty_array() {
    let (status, body) = post_analyze(app(), json!({ "texts": [] })).await;
    assert_eq!(status, StatusCode::OK);
    let records: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(records, json!([]));
}

#[tokio::test]
async fn analyze_is_deterministic() {
    let body = json!({ "texts": ["I'm not sure how I feel about this."] });
    let (_, first) = post_analyze(app(), body.clone()).await;
    let (_, second) = post_analyze(app(), body).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn scoring_failure_aborts_whole_batch() {
    let mut lexicon = Lexicon::parse("good\t1.9\t0.9\n").unwrap();
    lexicon.insert("cursed", f64::NAN);
    let app = app_with(SentimentIntensityAnalyzer::with_lexicon(lexicon));

    let (status, body) = post_analyze(
        app,
        json!({ "texts": ["good stuff", "a cursed thing", "more good stuff"] }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // A single error object, not a partial result list.
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error.is_object());
    let detail = error["detail"].as_str().unwrap();
    assert!(detail.contains("scoring failed"), "detail was: {detail}");
}

#[tokio::test]
async fn malformed_payload_is_rejected() {
    let (status, _) = post_analyze(app(), json!({ "wrong_field": [] })).await;
    assert!(status.is_client_error(), "status was {status}");
}

#[tokio::test]
async fn health_endpoint_responds() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin_with_credentials() {
    let origin = ServerConfig::default().allowed_origin;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/analyze")
        .header(header::ORIGIN, origin.clone())
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(origin.as_str())
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|v| v.to_str().ok()),
        Some("POST")
    );
}

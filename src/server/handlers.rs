//! Request handlers for the scoring service.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::Error;
use crate::types::{ResultRecord, TextInput};

use super::AppState;

/// Handler-level error, rendered as `{ "detail": "<message>" }` with a
/// 500 status. Batches are all-or-nothing: the first scoring failure
/// discards any records already produced.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.0.to_string();
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response()
    }
}

/// `POST /analyze`: score each text in order and return one record per
/// input.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TextInput>,
) -> Result<Json<Vec<ResultRecord>>, ApiError> {
    tracing::info!(texts = input.texts.len(), "received analyze request");

    let mut results = Vec::with_capacity(input.texts.len());
    for text in input.texts {
        let sentiment = state.analyzer.polarity_scores(&text).map_err(|err| {
            tracing::error!(error = %err, "sentiment analysis failed");
            err
        })?;
        results.push(ResultRecord { text, sentiment });
    }

    tracing::info!(results = results.len(), "analysis completed");
    Ok(Json(results))
}

/// `GET /health`: liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

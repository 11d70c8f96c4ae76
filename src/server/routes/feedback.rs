use crate::feedback::{FeedbackEntry, FeedbackSubmission, FeedbackSummary};
use crate::server::error::{AppError, AppResult};
use crate::server::state::AppState;
use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub id: String,
}

/// Accepts any JSON body; missing or mistyped fields are coerced, not rejected.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<SubmitResponse>> {
    let value: Value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)?
    };
    let submission = FeedbackSubmission::from_json(&value);

    let store = state.store.clone();
    let entry = tokio::task::spawn_blocking(move || store.append(submission))
        .await
        .map_err(|e| AppError::Any(e.into()))??;

    Ok(Json(SubmitResponse {
        ok: true,
        id: entry.id,
    }))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<FeedbackEntry>>> {
    let store = state.store.clone();
    let entries = tokio::task::spawn_blocking(move || store.list())
        .await
        .map_err(|e| AppError::Any(e.into()))?;
    Ok(Json(entries))
}

pub async fn summary(State(state): State<Arc<AppState>>) -> AppResult<Json<FeedbackSummary>> {
    let store = state.store.clone();
    let entries = tokio::task::spawn_blocking(move || store.list())
        .await
        .map_err(|e| AppError::Any(e.into()))?;
    Ok(Json(FeedbackSummary::from_entries(&entries)))
}

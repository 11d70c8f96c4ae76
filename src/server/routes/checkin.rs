use crate::catalog::{Category, Question, ScaleOption, ANSWER_SCALE, CATEGORIES, QUESTIONS};
use crate::codec;
use crate::scorer::{self, Answers, CheckInResult};
use crate::server::error::{AppError, AppResult};
use crate::server::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub categories: &'static [Category],
    pub questions: &'static [Question],
    pub scale: &'static [ScaleOption],
}

#[derive(Deserialize)]
pub struct CheckInRequest {
    pub answers: Answers,
}

#[derive(Serialize)]
pub struct CheckInResponse {
    pub result: CheckInResult,
    pub token: String,
    pub link: String,
}

pub async fn questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        categories: &CATEGORIES,
        questions: &QUESTIONS,
        scale: &ANSWER_SCALE,
    })
}

/// Parses the body itself so that every malformed request, including values
/// that do not fit the answer type, is a 400 with a JSON error body.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<CheckInResponse>> {
    let payload: CheckInRequest = serde_json::from_slice(&body)?;
    scorer::validate_answers(&payload.answers)?;

    let result = scorer::calculate_result(&payload.answers);
    let token = codec::encode_result(&result);
    let share = &state.config.share;
    let link = codec::share_link(&share.share_origin, &share.share_path, &token);

    info!(
        "💞 Check-in scored: overall {} | focus {} | {} answers",
        result.overall,
        result.focus_area,
        payload.answers.len()
    );

    Ok(Json(CheckInResponse {
        result,
        token,
        link,
    }))
}

pub async fn decode(Path(token): Path<String>) -> AppResult<Json<CheckInResult>> {
    codec::decode_token(&token)
        .map(Json)
        .map_err(|e| AppError::NotFound(format!("No result in share token ({})", e)))
}

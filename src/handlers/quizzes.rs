// src/handlers/quizzes.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::quiz::{CategoryScope, QuizRequest},
    queries::quiz::pick_question,
    utils::extract::AppJson,
};

/// Returns a random question from the requested category that is not one of
/// `previous_questions`. The client carries the round's history; nothing is
/// kept server-side between calls.
pub async fn next_question(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let scope = CategoryScope::from(payload.quiz_category);

    let question = pick_question(&pool, &scope, &payload.previous_questions)
        .await
        .map_err(|e| {
            tracing::error!("Failed to pick quiz question: {:?}", e);
            AppError::from(e)
        })?
        .ok_or_else(|| {
            tracing::debug!("No eligible quiz question for {:?}", scope);
            AppError::NotFound("No eligible question left".to_string())
        })?;

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}

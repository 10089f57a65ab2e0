// src/handlers/questions.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, SearchRequest},
    queries::{
        categories::list_categories,
        questions::{self, QuestionFilter, fetch_questions, insert_question},
    },
    utils::{
        extract::{AppJson, AppPath, AppQuery},
        pagination::{PageParams, paginate},
    },
};

/// Lists one page of all questions, together with every category.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions = fetch_questions(&pool, &QuestionFilter::All)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::from(e)
        })?;

    let categories = list_categories(&pool).await?;
    let total_questions = questions.len();

    Ok(Json(json!({
        "success": true,
        "questions": paginate(questions, params.page()),
        "total_questions": total_questions,
        "categories": categories,
    })))
}

/// Deletes a question by ID.
/// A question that is already gone is reported the same as one that never existed.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = questions::delete_question(&pool, id).await.map_err(|e| {
        tracing::error!("Failed to delete question {}: {:?}", id, e);
        AppError::from(e)
    })?;

    if !deleted {
        tracing::debug!("Question {} not found for delete", id);
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    tracing::info!("Deleted question {}", id);

    Ok(Json(json!({
        "success": true,
        "deleted": id,
    })))
}

/// Creates a new question.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = insert_question(&pool, &payload).await.map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!("Created question {} in category '{}'", id, payload.category);

    Ok(Json(json!({
        "success": true,
        "created": id,
    })))
}

/// Lists one page of the questions whose text contains the search term.
/// The term comes from the JSON body; an empty term matches everything.
pub async fn search_questions(
    State(pool): State<SqlitePool>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(payload): AppJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let filter = QuestionFilter::search(payload.search.as_deref());

    let questions = fetch_questions(&pool, &filter).await.map_err(|e| {
        tracing::error!("Failed to search questions: {:?}", e);
        AppError::from(e)
    })?;

    let total_questions = questions.len();

    Ok(Json(json!({
        "success": true,
        "questions": paginate(questions, params.page()),
        "total_questions": total_questions,
    })))
}

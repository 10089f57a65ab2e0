// src/handlers/categories.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    queries::{
        categories::{list_categories as fetch_categories, resolve_label},
        questions::{QuestionFilter, fetch_questions},
    },
    utils::{
        extract::{AppPath, AppQuery},
        pagination::{PageParams, paginate},
    },
};

/// Lists every category.
pub async fn list_categories(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let categories = fetch_categories(&pool).await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(json!({
        "success": true,
        "total_categories": categories.len(),
        "categories": categories,
    })))
}

/// Lists one page of the questions in a category.
///
/// `category` is either a category id or a label; labels match case-insensitively.
pub async fn list_category_questions(
    State(pool): State<SqlitePool>,
    AppPath(category): AppPath<String>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let label = resolve_label(&pool, &category).await?;

    let questions = fetch_questions(&pool, &QuestionFilter::Category(label.clone()))
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions for category '{}': {:?}", label, e);
            AppError::from(e)
        })?;

    let total_questions = questions.len();

    Ok(Json(json!({
        "success": true,
        "questions": paginate(questions, params.page()),
        "total_questions": total_questions,
        "current_category": label,
    })))
}

// src/handlers/fallback.rs

use crate::error::AppError;

/// Any path no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// A known path requested with a verb it does not support.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

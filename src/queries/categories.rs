// src/queries/categories.rs

use sqlx::SqlitePool;

use crate::models::category::Category;

pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_category(pool: &SqlitePool, id: i64) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Resolves a `/categories/{category}` path segment to a category label.
///
/// A numeric segment naming an existing category id resolves to that
/// category's label; anything else is taken as the label itself.
pub async fn resolve_label(pool: &SqlitePool, segment: &str) -> Result<String, sqlx::Error> {
    if let Ok(id) = segment.trim().parse::<i64>() {
        if let Some(category) = find_category(pool, id).await? {
            return Ok(category.kind);
        }
    }
    Ok(segment.to_string())
}

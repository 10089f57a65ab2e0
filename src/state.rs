// src/state.rs

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Shared per-request state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

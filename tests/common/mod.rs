// tests/common/mod.rs

#![allow(dead_code)]

use sqlx::SqlitePool;
use trivia_api::{db, routes, state::AppState};

pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Inserts a question directly, bypassing the API.
    pub async fn seed_question(&self, question: &str, category: &str) -> i64 {
        sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(question)
        .bind("answer")
        .bind(category)
        .bind(1)
        .execute(&self.pool)
        .await
        .expect("Failed to seed question")
        .last_insert_rowid()
    }
}

/// Spawns the app on a random port backed by a fresh in-memory database.
pub async fn spawn_app() -> TestApp {
    let pool = db::memory_pool()
        .await
        .expect("Failed to create in-memory database");

    let state = AppState { pool: pool.clone() };
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        pool,
        client: reqwest::Client::new(),
    }
}

/// Asserts the shared error body shape and returns it.
pub async fn assert_error(response: reqwest::Response, status: u16) -> serde_json::Value {
    assert_eq!(response.status().as_u16(), status);
    let body: serde_json::Value = response.json().await.expect("Error body is not JSON");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], status);
    assert!(body["message"].is_string());
    body
}

// tests/quiz_tests.rs

mod common;

use common::{assert_error, spawn_app};
use serde_json::{Value, json};

#[tokio::test]
async fn quiz_returns_an_unseen_question_from_the_category() {
    let app = spawn_app().await;
    let seen = app.seed_question("First", "Geography").await;
    let unseen = app.seed_question("Second", "Geography").await;
    app.seed_question("Elsewhere", "Sports").await;

    let response = app
        .client
        .post(app.url("/quizzes"))
        .json(&json!({
            "previous_questions": [seen],
            "quiz_category": "Geography"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], unseen);
    assert_eq!(body["question"]["category"], "Geography");
}

#[tokio::test]
async fn quiz_round_visits_every_question_once() {
    let app = spawn_app().await;
    let mut seeded = Vec::new();
    for i in 0..4 {
        seeded.push(app.seed_question(&format!("Q{}", i), "History").await);
    }

    let mut previous: Vec<i64> = Vec::new();
    for _ in 0..4 {
        let body: Value = app
            .client
            .post(app.url("/quizzes"))
            .json(&json!({
                "previous_questions": previous,
                "quiz_category": {"id": 4, "type": "History"}
            }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let picked = body["question"]["id"].as_i64().expect("question id missing");
        assert!(!previous.contains(&picked));
        previous.push(picked);
    }

    previous.sort_unstable();
    assert_eq!(previous, seeded);

    // The round is exhausted
    let response = app
        .client
        .post(app.url("/quizzes"))
        .json(&json!({
            "previous_questions": previous,
            "quiz_category": "history"
        }))
        .send()
        .await
        .unwrap();
    assert_error(response, 404).await;
}

#[tokio::test]
async fn quiz_all_categories_sentinels() {
    let app = spawn_app().await;
    let art = app.seed_question("a", "Art").await;
    let sports = app.seed_question("b", "Sports").await;

    for category in [json!(null), json!("all"), json!({"id": 0, "type": "click"})] {
        let body: Value = app
            .client
            .post(app.url("/quizzes"))
            .json(&json!({
                "previous_questions": [art],
                "quiz_category": category
            }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["question"]["id"], sports, "{}", category);
    }
}

#[tokio::test]
async fn quiz_accepts_string_category_id_and_null_history() {
    let app = spawn_app().await;
    let id = app.seed_question("What is H2O?", "science").await;

    let response = app
        .client
        .post(app.url("/quizzes"))
        .json(&json!({
            "previous_questions": null,
            "quiz_category": {"id": "1", "type": "Science"}
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["question"]["id"], id);
}

#[tokio::test]
async fn quiz_with_no_eligible_question_is_404() {
    let app = spawn_app().await;
    let id = app.seed_question("only", "Science").await;

    let response = app
        .client
        .post(app.url("/quizzes"))
        .json(&json!({
            "previous_questions": [id],
            "quiz_category": "Science"
        }))
        .send()
        .await
        .unwrap();
    assert_error(response, 404).await;

    let response = app
        .client
        .post(app.url("/quizzes"))
        .json(&json!({
            "previous_questions": [],
            "quiz_category": "Science not found"
        }))
        .send()
        .await
        .unwrap();
    assert_error(response, 404).await;
}

#[tokio::test]
async fn quiz_rejects_malformed_body() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/quizzes"))
        .json(&json!({"previous_questions": "1,2,3"}))
        .send()
        .await
        .unwrap();

    assert_error(response, 422).await;
}

#[tokio::test]
async fn quiz_rejects_get() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/quizzes")).send().await.unwrap();

    assert_error(response, 405).await;
}

// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Category label. Matched against `categories.type` case-insensitively.
    pub category: String,

    /// Difficulty score, 1 (easy) to 5 (hard).
    pub difficulty: i32,
}

/// DTO for creating a new question.
///
/// `difficulty` is an `i32` so numbers outside the column's range are
/// rejected while the body is decoded.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000), custom(function = validate_not_blank))]
    pub question: String,
    #[validate(length(min = 1, max = 1000), custom(function = validate_not_blank))]
    pub answer: String,
    #[validate(length(min = 1, max = 100), custom(function = validate_not_blank))]
    pub category: String,
    #[validate(range(min = 1, max = 5, message = "Difficulty must be between 1 and 5"))]
    pub difficulty: i32,
}

/// Body of `GET /questions/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Substring to look for. Absent or empty matches every question.
    #[serde(default)]
    pub search: Option<String>,
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("must_not_be_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(difficulty: i32) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: "Q".to_string(),
            answer: "A".to_string(),
            category: "comic".to_string(),
            difficulty,
        }
    }

    #[test]
    fn accepts_a_well_formed_question() {
        assert!(request(1).validate().is_ok());
        assert!(request(5).validate().is_ok());
    }

    #[test]
    fn rejects_difficulty_out_of_range() {
        assert!(request(0).validate().is_err());
        assert!(request(6).validate().is_err());
        assert!(request(-1).validate().is_err());
    }

    #[test]
    fn rejects_blank_text() {
        let mut req = request(2);
        req.answer = "   ".to_string();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("answer"));
    }

    #[test]
    fn oversized_difficulty_fails_to_decode() {
        let body = r#"{"question":"Q","answer":"A","category":"comic","difficulty":11111111111111111111111111111111}"#;
        assert!(serde_json::from_str::<CreateQuestionRequest>(body).is_err());
    }

    #[test]
    fn non_string_search_fails_to_decode() {
        assert!(serde_json::from_str::<SearchRequest>(r#"{"search": 42}"#).is_err());
        let empty: SearchRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.search.is_none());
    }
}

// src/queries/questions.rs

use sqlx::SqlitePool;

use crate::models::question::{CreateQuestionRequest, Question};

pub(crate) const SELECT_QUESTIONS: &str = "SELECT id, question, answer, category, difficulty FROM questions";

/// Which questions a listing returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    /// Every question.
    All,
    /// Questions whose text contains the term, ignoring case.
    Search(String),
    /// Questions whose category label equals the given one, ignoring case.
    Category(String),
}

impl QuestionFilter {
    /// An empty or missing term matches every question.
    pub fn search(term: Option<&str>) -> Self {
        match term {
            Some(term) if !term.is_empty() => QuestionFilter::Search(term.to_string()),
            _ => QuestionFilter::All,
        }
    }

    /// Case folding happens here rather than in SQL, since SQLite's `LOWER`
    /// and `LIKE` only fold ASCII letters.
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            QuestionFilter::All => true,
            QuestionFilter::Search(term) => question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase()),
            QuestionFilter::Category(label) => same_category(&question.category, label),
        }
    }
}

/// Category labels compare equal ignoring case, for any script.
pub fn same_category(stored: &str, requested: &str) -> bool {
    stored.to_lowercase() == requested.to_lowercase()
}

/// Returns all questions matching `filter`, ordered by id.
pub async fn fetch_questions(
    pool: &SqlitePool,
    filter: &QuestionFilter,
) -> Result<Vec<Question>, sqlx::Error> {
    let sql = format!("{} ORDER BY id", SELECT_QUESTIONS);
    let questions = sqlx::query_as::<_, Question>(&sql)
        .fetch_all(pool)
        .await?;

    Ok(questions
        .into_iter()
        .filter(|question| filter.matches(question))
        .collect())
}

/// Inserts a validated question and returns its new id.
pub async fn insert_question(
    pool: &SqlitePool,
    req: &CreateQuestionRequest,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
    )
    .bind(&req.question)
    .bind(&req.answer)
    .bind(&req.category)
    .bind(req.difficulty)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Deletes a question. Returns `false` when no row had that id, which also
/// covers a concurrent delete that got there first.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

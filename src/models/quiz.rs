// src/models/quiz.rs

use serde::{Deserialize, Deserializer};

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids already asked in this round; never returned again. `null` reads as none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub previous_questions: Vec<i64>,

    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// The category a quiz is played in, as sent by clients.
///
/// Accepts a bare label (`"Science"`), a bare id (`1`), or a category
/// object (`{"id": 1, "type": "Science"}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuizCategory {
    Id(i64),
    Label(String),
    Object {
        #[serde(default, deserialize_with = "lenient_id")]
        id: Option<i64>,
        #[serde(default, rename = "type")]
        kind: Option<String>,
    },
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<i64>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

/// Category ids may arrive as numbers or as numeric strings (`"1"`).
/// A string that is not a number is ignored so the `type` label decides.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(id)) => Some(id),
        Some(NumberOrText::Text(raw)) => raw.trim().parse().ok(),
        None => None,
    })
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    Id(i64),
    Label(String),
}

const ALL_CATEGORIES: &str = "all";

impl CategoryScope {
    /// Interprets a free-form label. Empty or "all" (any case) selects every category.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryScope::All
        } else {
            CategoryScope::Label(label.to_string())
        }
    }

    fn from_id(id: i64) -> Self {
        // id 0 is what clients send for the "All" pseudo-category
        if id == 0 {
            CategoryScope::All
        } else {
            CategoryScope::Id(id)
        }
    }
}

impl From<Option<QuizCategory>> for CategoryScope {
    fn from(category: Option<QuizCategory>) -> Self {
        match category {
            None => CategoryScope::All,
            Some(QuizCategory::Id(id)) => CategoryScope::from_id(id),
            Some(QuizCategory::Label(label)) => CategoryScope::from_label(&label),
            Some(QuizCategory::Object { id: Some(id), .. }) => CategoryScope::from_id(id),
            Some(QuizCategory::Object { id: None, kind }) => {
                CategoryScope::from_label(kind.as_deref().unwrap_or_default())
            }
        }
    }
}

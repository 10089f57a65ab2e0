// src/queries/quiz.rs

use std::collections::BTreeSet;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    models::{question::Question, quiz::CategoryScope},
    queries::{
        categories::find_category,
        questions::{SELECT_QUESTIONS, same_category},
    },
};

/// Picks one random question in `scope` whose id is not in `previous`.
///
/// Returns `Ok(None)` when nothing is eligible, including when `scope`
/// names a category id that does not exist.
pub async fn pick_question(
    pool: &SqlitePool,
    scope: &CategoryScope,
    previous: &[i64],
) -> Result<Option<Question>, sqlx::Error> {
    let label = match scope {
        CategoryScope::All => None,
        CategoryScope::Label(label) => Some(label.clone()),
        CategoryScope::Id(id) => match find_category(pool, *id).await? {
            Some(category) => Some(category.kind),
            None => return Ok(None),
        },
    };

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_QUESTIONS);

    let excluded: BTreeSet<i64> = previous.iter().copied().collect();
    if !excluded.is_empty() {
        builder.push(" WHERE id NOT IN (");
        let mut separated = builder.separated(", ");
        for id in excluded {
            separated.push_bind(id);
        }
        separated.push_unseparated(")");
    }

    // Rows come back shuffled, so the first one in the category is a random pick.
    // The category check runs in Rust to fold non-ASCII case.
    builder.push(" ORDER BY RANDOM()");

    let candidates = builder.build_query_as::<Question>().fetch_all(pool).await?;

    Ok(candidates.into_iter().find(|question| match &label {
        Some(label) => same_category(&question.category, label),
        None => true,
    }))
}

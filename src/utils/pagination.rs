// src/utils/pagination.rs

use serde::Deserialize;

use crate::config::QUESTIONS_PER_PAGE;

/// Query parameters shared by the paginated endpoints.
///
/// `page` is kept as raw text so that a missing or unparsable value falls
/// back to the first page instead of rejecting the request. The query is
/// decoded as raw pairs, so a repeated `page` takes its first value.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<Vec<(String, String)>> for PageParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value);
        PageParams { page }
    }
}

impl PageParams {
    /// The requested 1-based page, clamped to at least 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(clamp_page)
            .unwrap_or(1)
    }
}

fn clamp_page(page: i64) -> usize {
    usize::try_from(page.max(1)).unwrap_or(usize::MAX)
}

/// Returns the `page`-th slice of `items`, `QUESTIONS_PER_PAGE` items wide.
/// Pages past the end yield an empty vector.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    paginate_with(items, page, QUESTIONS_PER_PAGE)
}

pub fn paginate_with<T>(items: Vec<T>, page: usize, per_page: usize) -> Vec<T> {
    let start = page.max(1).saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return Vec::new();
    }

    items.into_iter().skip(start).take(per_page).collect()
}

//! hh.ru vacancy-search API integration.

use reqwest::blocking::Client;

use crate::domain::{VacanciesPage, Vacancy};
use crate::error::AppError;

const DEFAULT_BASE_URL: &str = "https://api.hh.ru/vacancies";

/// hh.ru rejects requests without a User-Agent, so we always send one.
const DEFAULT_USER_AGENT: &str = "hh-stats/0.1 (vacancy salary analytics)";

/// Anything that can serve one page of search results.
///
/// `HhClient` is the real implementation; `CachedSource` wraps any source with
/// a disk cache, and tests substitute canned pages.
pub trait VacancySource {
    fn fetch_page(&self, query: &str, page: u32) -> Result<VacanciesPage, AppError>;
}

pub struct HhClient {
    client: Client,
    base_url: String,
    per_page: u32,
}

impl HhClient {
    /// Build a client, honoring `HH_BASE_URL` / `HH_USER_AGENT` overrides
    /// from the environment (`.env` supported).
    pub fn from_env(per_page: u32) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var("HH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let user_agent =
            std::env::var("HH_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::new(2, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url,
            per_page,
        })
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

impl VacancySource for HhClient {
    fn fetch_page(&self, query: &str, page: u32) -> Result<VacanciesPage, AppError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("text", query)])
            .query(&[("only_with_salary", "true")])
            .query(&[("per_page", self.per_page), ("page", page)])
            .send()
            .map_err(|e| AppError::new(4, format!("Vacancy search request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::new(
                4,
                format!(
                    "Vacancy search failed with status {} (page {page}).",
                    resp.status()
                ),
            ));
        }

        resp.json()
            .map_err(|e| AppError::new(4, format!("Failed to parse vacancy search response: {e}")))
    }
}

/// Collect all result pages for `query` into one vacancy list.
///
/// Page 1 is fetched first to learn the total page count, then pages
/// `2..pages` in order. The upper bound is exclusive: the final page (index
/// `pages`) is never requested, so up to one page of trailing vacancies is
/// missing from the result. Long-standing quirk of the collection loop;
/// `fetch_all` pins it in a test rather than silently changing the totals.
///
/// Pages are fetched strictly sequentially with no retry or backoff; the
/// first failure aborts the whole collection.
pub fn fetch_all(source: &impl VacancySource, query: &str) -> Result<Vec<Vacancy>, AppError> {
    let first = source.fetch_page(query, 1)?;
    let pages = first.pages;

    let mut items = first.items;
    for page in 2..pages {
        let more = source.fetch_page(query, page)?;
        items.extend(more.items);
    }

    Ok(items)
}

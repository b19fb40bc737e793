//! Opportunistic disk cache for search result pages.
//!
//! Repeated runs against the same query are slow and rate-limited upstream,
//! so a `CachedSource` can sit between `fetch_all` and the network client.
//! The cache is keyed by query/page/per-page, stores one pretty-printed JSON
//! file per page, and has no eviction. It is a development convenience, not a
//! correctness requirement: any read or write problem degrades to a normal
//! network fetch.

use std::collections::hash_map::DefaultHasher;
use std::fs::{self, File};
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::hh::VacancySource;
use crate::domain::VacanciesPage;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    fetched_at: DateTime<Utc>,
    query: String,
    page: u32,
    per_page: u32,
    body: VacanciesPage,
}

pub struct PageCache {
    dir: PathBuf,
    per_page: u32,
}

impl PageCache {
    /// Open (creating if needed) a cache directory.
    pub fn open(dir: &Path, per_page: u32) -> Result<Self, AppError> {
        fs::create_dir_all(dir).map_err(|e| {
            AppError::new(
                2,
                format!("Failed to create cache directory '{}': {e}", dir.display()),
            )
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
            per_page,
        })
    }

    fn entry_path(&self, query: &str, page: u32) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        query.hash(&mut hasher);
        page.hash(&mut hasher);
        self.per_page.hash(&mut hasher);
        self.dir.join(format!("page-{:016x}.json", hasher.finish()))
    }

    /// Look a page up; any miss, parse failure, or stale schema reads as `None`.
    pub fn load(&self, query: &str, page: u32) -> Option<VacanciesPage> {
        let file = File::open(self.entry_path(query, page)).ok()?;
        let entry: CacheEntry = serde_json::from_reader(file).ok()?;
        if entry.query != query || entry.page != page || entry.per_page != self.per_page {
            return None;
        }
        Some(entry.body)
    }

    /// Store a page, best-effort. Write failures are swallowed: the caller
    /// already holds the data and the next run simply refetches.
    pub fn store(&self, query: &str, page: u32, body: &VacanciesPage) {
        let entry = CacheEntry {
            fetched_at: Utc::now(),
            query: query.to_string(),
            page,
            per_page: self.per_page,
            body: body.clone(),
        };
        if let Ok(file) = File::create(self.entry_path(query, page)) {
            let _ = serde_json::to_writer_pretty(file, &entry);
        }
    }
}

/// Transparent caching wrapper around any `VacancySource`.
pub struct CachedSource<S> {
    inner: S,
    cache: PageCache,
}

impl<S: VacancySource> CachedSource<S> {
    pub fn new(inner: S, cache: PageCache) -> Self {
        Self { inner, cache }
    }
}

impl<S: VacancySource> VacancySource for CachedSource<S> {
    fn fetch_page(&self, query: &str, page: u32) -> Result<VacanciesPage, AppError> {
        if let Some(hit) = self.cache.load(query, page) {
            return Ok(hit);
        }
        let body = self.inner.fetch_page(query, page)?;
        self.cache.store(query, page, &body);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Area, Salary, Vacancy};
    use std::cell::Cell;

    fn sample_page() -> VacanciesPage {
        VacanciesPage {
            items: vec![Vacancy {
                name: "Backend developer".to_string(),
                salary: Salary {
                    from: Some(90_000.0),
                    to: Some(130_000.0),
                    currency: "RUR".to_string(),
                },
                area: Area {
                    name: "Moscow".to_string(),
                },
            }],
            pages: 2,
        }
    }

    fn temp_cache_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hh-stats-test-{tag}-{}", std::process::id()))
    }

    struct CountingSource {
        calls: Cell<u32>,
    }

    impl VacancySource for CountingSource {
        fn fetch_page(&self, _query: &str, _page: u32) -> Result<VacanciesPage, AppError> {
            self.calls.set(self.calls.get() + 1);
            Ok(sample_page())
        }
    }

    #[test]
    fn store_then_load_round_trips() {
        let dir = temp_cache_dir("roundtrip");
        let cache = PageCache::open(&dir, 100).unwrap();

        assert!(cache.load("python", 1).is_none());
        let page = sample_page();
        cache.store("python", 1, &page);
        assert_eq!(cache.load("python", 1), Some(page));

        // Same query, different page or per-page: distinct entries.
        assert!(cache.load("python", 2).is_none());
        let other = PageCache::open(&dir, 50).unwrap();
        assert!(other.load("python", 1).is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn cached_source_fetches_once() {
        let dir = temp_cache_dir("fetch-once");
        let cache = PageCache::open(&dir, 100).unwrap();
        let source = CachedSource::new(
            CountingSource {
                calls: Cell::new(0),
            },
            cache,
        );

        let first = source.fetch_page("python", 1).unwrap();
        let second = source.fetch_page("python", 1).unwrap();
        assert_eq!(first, second);
        assert_eq!(source.inner.calls.get(), 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_entry_falls_through_to_source() {
        let dir = temp_cache_dir("corrupt");
        let cache = PageCache::open(&dir, 100).unwrap();
        fs::write(cache.entry_path("python", 1), b"not json").unwrap();

        let source = CachedSource::new(
            CountingSource {
                calls: Cell::new(0),
            },
            cache,
        );
        source.fetch_page("python", 1).unwrap();
        assert_eq!(source.inner.calls.get(), 1);

        let _ = fs::remove_dir_all(&dir);
    }
}

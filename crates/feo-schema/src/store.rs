//! # Schema Store
//!
//! Owns the cached schema document and its freshness state.
//!
//! ## Freshness
//!
//! An entry is fresh for [`FRESHNESS_WINDOW_SECS`] after it was fetched.
//! [`SchemaStore::ensure_fresh`] refetches when the cache is empty or stale,
//! making exactly one attempt.
//!
//! ## Stale over absent
//!
//! A failed refresh keeps the previous entry. `FetchError` reaches the caller
//! only when there is nothing cached at all.
//!
//! ## Concurrency
//!
//! The cache slot holds an `Arc<CacheEntry>` behind a `parking_lot::RwLock`.
//! Refresh builds a complete entry first and swaps the `Arc` under a short
//! write lock, so readers see either the old or the new entry, never a
//! partial one. The lock is never held across the fetch `.await`. Racing
//! refreshers may each fetch; the last swap wins.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use feo_core::FetchError;
use parking_lot::RwLock;
use serde_json::Value;

use crate::source::SchemaSource;

/// How long a fetched schema is served before it is refetched.
pub const FRESHNESS_WINDOW_SECS: i64 = 60 * 60;

/// A fetched schema document and when it was fetched.
#[derive(Debug)]
pub struct CacheEntry {
    document: Value,
    fetched_at: DateTime<Utc>,
    source: String,
}

impl CacheEntry {
    pub fn new(document: Value, fetched_at: DateTime<Utc>, source: impl Into<String>) -> Self {
        Self {
            document,
            fetched_at,
            source: source.into(),
        }
    }

    /// The schema document. Never mutated once cached.
    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Location the document was fetched from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Age of the entry at `now`.
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.fetched_at
    }

    /// Whole minutes since the entry was fetched, as shown in reports.
    pub fn age_minutes_at(&self, now: DateTime<Utc>) -> i64 {
        self.age_at(now).num_minutes()
    }

    /// True once the entry is older than the freshness window.
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        self.age_at(now).num_seconds() > FRESHNESS_WINDOW_SECS
    }
}

/// Time-bounded cache of the schema document.
///
/// Cloning is cheap and clones share the same cache slot, so one store can
/// be handed to every component that needs it.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    source: Arc<dyn SchemaSource>,
    entry: Arc<RwLock<Option<Arc<CacheEntry>>>>,
}

impl SchemaStore {
    /// Create an empty store backed by `source`. Nothing is fetched until
    /// [`ensure_fresh`](Self::ensure_fresh) is called.
    pub fn new(source: Arc<dyn SchemaSource>) -> Self {
        Self {
            source,
            entry: Arc::new(RwLock::new(None)),
        }
    }

    /// Location of the underlying source.
    pub fn location(&self) -> &str {
        self.source.location()
    }

    /// The cached entry, if any, regardless of freshness.
    pub fn current(&self) -> Option<Arc<CacheEntry>> {
        self.entry.read().clone()
    }

    /// Make sure a fresh entry is cached, fetching at most once.
    ///
    /// # Errors
    ///
    /// Returns the fetch error only when the fetch failed and no entry,
    /// stale or not, is cached.
    pub async fn ensure_fresh(&self) -> Result<Arc<CacheEntry>, FetchError> {
        self.ensure_fresh_at(Utc::now()).await
    }

    /// [`ensure_fresh`](Self::ensure_fresh) against an explicit clock.
    pub async fn ensure_fresh_at(&self, now: DateTime<Utc>) -> Result<Arc<CacheEntry>, FetchError> {
        let cached = self.current();
        if let Some(entry) = &cached {
            if !entry.is_stale_at(now) {
                return Ok(Arc::clone(entry));
            }
        }

        tracing::debug!(source = self.location(), "fetching schema");
        match self.source.fetch().await {
            Ok(document) => {
                let entry = Arc::new(CacheEntry::new(document, now, self.location()));
                *self.entry.write() = Some(Arc::clone(&entry));
                tracing::info!(
                    source = self.location(),
                    refreshed = cached.is_some(),
                    "schema cached"
                );
                Ok(entry)
            }
            Err(e) => match cached {
                Some(stale) => {
                    tracing::warn!(
                        error = %e,
                        age_minutes = stale.age_minutes_at(now),
                        "schema refresh failed; serving stale copy"
                    );
                    Ok(stale)
                }
                None => {
                    tracing::warn!(error = %e, "schema fetch failed and nothing is cached");
                    Err(e)
                }
            },
        }
    }
}

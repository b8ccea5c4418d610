//! # Response Cache / Invalidation Bus
//!
//! A keyed cache of request results with explicit invalidation. Entries are
//! keyed by the request's logical identity (endpoint path plus parameters)
//! and never expire by time: once fresh, an entry stays fresh until a
//! mutation or the session controller invalidates it, or the cache is
//! cleared on logout.
//!
//! Locks are synchronous (`parking_lot`) and never held across an await;
//! fetches run unlocked, so concurrent readers of different keys never block
//! each other. Out-of-order completion of concurrent fetches for the same key
//! is tolerated: the last completed fetch wins.

use std::collections::HashMap;
use std::future::Future;

use parking_lot::RwLock;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::core::error::{AppError, Result};

/// Lifecycle state of a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// A fetch for this key is in flight.
    Pending,
    /// The stored value is current; reads are served without a network call.
    Fresh,
    /// The stored value is stale; the next read refetches.
    Invalidated,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    /// Last successful response payload, kept through invalidation.
    value: Option<Value>,
    state: EntryState,
}

/// Keyed response cache with explicit invalidation.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a key, fetching when no fresh value is available.
    ///
    /// A `Fresh` entry is served directly with zero network calls. An absent,
    /// `Pending`, or `Invalidated` entry runs `fetch`; on success the entry
    /// transitions to `Fresh`. A failed fetch is never cached: the error
    /// propagates and the entry keeps the state it had before the attempt.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(value) = self.fresh_value(key) {
            tracing::debug!(key, "cache hit");
            return serde_json::from_value(value)
                .map_err(|e| AppError::Schema(format!("cached value for {}: {}", key, e)));
        }

        tracing::debug!(key, "cache miss, fetching");
        let prior = self.begin_fetch(key);

        match fetch().await {
            Ok(fetched) => match serde_json::to_value(&fetched) {
                Ok(json) => {
                    self.complete_fetch(key, json);
                    Ok(fetched)
                }
                Err(e) => {
                    self.abort_fetch(key, prior);
                    Err(AppError::Schema(format!("response for {}: {}", key, e)))
                }
            },
            Err(err) => {
                self.abort_fetch(key, prior);
                Err(err)
            }
        }
    }

    /// The last successfully fetched value for a key, regardless of state.
    ///
    /// Lets a caller show stale data while a refetch is in flight; the
    /// default read path ([`get_or_fetch`](Self::get_or_fetch)) refetches
    /// instead.
    pub fn last_known<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.entries.read();
        let value = entries.get(key)?.value.clone()?;
        serde_json::from_value(value).ok()
    }

    /// Mark one key invalidated. The stored value is kept, not evicted.
    pub fn invalidate(&self, key: &str) {
        let mut entries = self.entries.write();
        if let Some(entry) = entries.get_mut(key) {
            entry.state = EntryState::Invalidated;
            tracing::debug!(key, "cache entry invalidated");
        }
    }

    /// Mark every key starting with `prefix` invalidated.
    pub fn invalidate_prefix(&self, prefix: &str) {
        let mut entries = self.entries.write();
        for (key, entry) in entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.state = EntryState::Invalidated;
                tracing::debug!(key, "cache entry invalidated");
            }
        }
    }

    /// Mark every entry invalidated (used after login, so authenticated views
    /// refetch with the new credentials).
    pub fn invalidate_all(&self) {
        let mut entries = self.entries.write();
        for entry in entries.values_mut() {
            entry.state = EntryState::Invalidated;
        }
        tracing::debug!(count = entries.len(), "all cache entries invalidated");
    }

    /// Evict every entry (used on logout).
    pub fn clear(&self) {
        self.entries.write().clear();
        tracing::debug!("cache cleared");
    }

    /// Current state of a key's entry, if present.
    pub fn entry_state(&self, key: &str) -> Option<EntryState> {
        self.entries.read().get(key).map(|entry| entry.state)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn fresh_value(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|entry| entry.state == EntryState::Fresh)
            .and_then(|entry| entry.value.clone())
    }

    fn begin_fetch(&self, key: &str) -> Option<CacheEntry> {
        let mut entries = self.entries.write();
        let prior = entries.get(key).cloned();
        entries.insert(
            key.to_string(),
            CacheEntry {
                value: prior.as_ref().and_then(|p| p.value.clone()),
                state: EntryState::Pending,
            },
        );
        prior
    }

    fn complete_fetch(&self, key: &str, value: Value) {
        // Unconditional: with concurrent fetches the last completion wins.
        self.entries.write().insert(
            key.to_string(),
            CacheEntry {
                value: Some(value),
                state: EntryState::Fresh,
            },
        );
    }

    fn abort_fetch(&self, key: &str, prior: Option<CacheEntry>) {
        let mut entries = self.entries.write();
        // Only roll back if no concurrent fetch completed in the meantime.
        if entries.get(key).map(|entry| entry.state) == Some(EntryState::Pending) {
            match prior {
                Some(previous) => {
                    entries.insert(key.to_string(), previous);
                }
                None => {
                    entries.remove(key);
                }
            }
        }
    }
}

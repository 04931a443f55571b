// Time-boxed memoization for API calls.
//
// Trending lists change slowly and every call spends API quota, so results
// are kept for a configurable TTL keyed by the call's arguments. Expired
// entries are evicted when read, and swept on every insert so keys that are
// never asked for again do not pile up.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::debug;

/// A TTL cache with interior mutability, shareable behind `&self`.
pub struct TtlCache<K, V> {
    entries: Mutex<HashMap<K, (Instant, V)>>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// The cached value, if present and younger than the TTL.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let expired = match entries.get(key) {
            Some((stored, value)) if stored.elapsed() < self.ttl => return Some(value.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.remove(key);
        }
        None
    }

    pub fn insert(&self, key: K, value: V) {
        let ttl = self.ttl;
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(|_, (stored, _)| stored.elapsed() < ttl);
        entries.insert(key, (Instant::now(), value));
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the cached value or run `fetch` and cache its success.
    ///
    /// Errors are not cached. The lock is not held while `fetch` runs.
    pub async fn get_or_try_insert_with<F, Fut>(&self, key: K, fetch: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(hit) = self.get(&key) {
            debug!("Cache hit");
            return Ok(hit);
        }

        let value = fetch().await?;
        self.insert(key, value.clone());
        Ok(value)
    }
}

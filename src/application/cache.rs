use std::{collections::HashMap, future::Future};

use tokio::sync::RwLock;

/// Key under which the full section list is cached.
pub const SECTIONS_KEY: &str = "sections";

/// Keyed query cache. Entries live until explicitly invalidated.
pub struct QueryCache<V> {
    entries: RwLock<HashMap<String, V>>,
}

impl<V> Default for QueryCache<V> {
    fn default() -> Self { Self { entries: RwLock::new(HashMap::new()) } }
}

impl<V: Clone + Send + Sync> QueryCache<V> {
    pub fn new() -> Self { Self::default() }

    pub async fn get(&self, key: &str) -> Option<V> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn set(&self, key: &str, value: V) {
        self.entries.write().await.insert(key.to_string(), value);
    }

    /// Drops the entry; returns whether one was present.
    pub async fn invalidate(&self, key: &str) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    /// Cached value for `key`, or the result of `fetch` stored under it.
    /// Failed fetches leave the cache untouched.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(hit) = self.get(key).await {
            return Ok(hit);
        }
        let value = fetch().await?;
        self.set(key, value.clone()).await;
        Ok(value)
    }
}

use log::debug;
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use tokio::sync::Mutex;

/// Keyed memo cache: computes a value on first request and serves the stored
/// value until invalidated.
///
/// The lock is held while a value is computed, so concurrent callers asking
/// for the same key wait for the first computation instead of repeating it.
pub struct MemoCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key`, computing and storing it first if
    /// absent.
    pub async fn get_or_compute<F, Fut>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        let mut entries = self.entries.lock().await;
        if let Some(value) = entries.get(&key) {
            debug!("Cache hit for {:?}", key);
            return value.clone();
        }

        debug!("Cache miss for {:?}", key);
        let value = compute().await;
        entries.insert(key, value.clone());
        value
    }

    /// Drops every entry; the next read of any key recomputes.
    pub async fn invalidate_all(&self) {
        let mut entries = self.entries.lock().await;
        debug!("Invalidating {} cache entries", entries.len());
        entries.clear();
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

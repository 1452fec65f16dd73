use std::collections::HashMap;
use std::hash::Hash;

use tokio::sync::Mutex;

/// Bounded least-recently-used cache. Recency is tracked with a monotonic
/// use counter, so eviction order is deterministic. Keys are used exactly
/// as given: no normalization, "Machado" and "machado" are distinct.
pub struct LruCache<K, V> {
    capacity: usize,
    tick: u64,
    entries: HashMap<K, (V, u64)>,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(capacity: usize) -> LruCache<K, V> {
        assert!(capacity > 0, "cache capacity must be positive");
        LruCache {
            capacity,
            tick: 0,
            entries: HashMap::with_capacity(capacity),
        }
    }

    pub fn get(&mut self, key: &K) -> Option<V> {
        self.tick += 1;
        let tick = self.tick;
        self.entries.get_mut(key).map(|(value, used)| {
            *used = tick;
            value.clone()
        })
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.tick += 1;
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.entries.insert(key, (value, self.tick));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, (_, used))| *used)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}

/// Per-operation memo table used by the aggregator: an [`LruCache`] keyed on
/// the raw input string, behind an async mutex. Lookups that miss release
/// the lock while the upstream call runs, so two concurrent misses for the
/// same key may both hit the upstream; results are idempotent.
pub struct Memo<V> {
    inner: Mutex<LruCache<String, V>>,
}

impl<V: Clone> Memo<V> {
    pub fn new(capacity: usize) -> Memo<V> {
        Memo {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.lock().await.get(&key.to_string())
    }

    pub async fn insert(&self, key: String, value: V) {
        self.inner.lock().await.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache: LruCache<String, u32> = LruCache::new(3);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);

        assert_eq!(cache.get(&"a".to_string()), Some(1));
        assert_eq!(cache.get(&"b".to_string()), Some(2));
        assert_eq!(cache.get(&"c".to_string()), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_capacity_bound_and_eviction_order() {
        let mut cache: LruCache<String, u32> = LruCache::new(2);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.insert("c".to_string(), 3);

        // "a" was least recently used and must be the one evicted
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a".to_string()), None);
        assert_eq!(cache.get(&"b".to_string()), Some(2));
        assert_eq!(cache.get(&"c".to_string()), Some(3));
    }

    #[test]
    fn test_get_refreshes_recency() {
        let mut cache: LruCache<String, u32> = LruCache::new(2);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);

        // Touch "a" so "b" becomes the eviction candidate
        assert_eq!(cache.get(&"a".to_string()), Some(1));
        cache.insert("c".to_string(), 3);

        assert_eq!(cache.get(&"a".to_string()), Some(1));
        assert_eq!(cache.get(&"b".to_string()), None);
        assert_eq!(cache.get(&"c".to_string()), Some(3));
    }

    #[test]
    fn test_reinsert_existing_key_does_not_evict() {
        let mut cache: LruCache<String, u32> = LruCache::new(2);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.insert("a".to_string(), 10);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a".to_string()), Some(10));
        assert_eq!(cache.get(&"b".to_string()), Some(2));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut cache: LruCache<String, u32> = LruCache::new(4);
        cache.insert("Machado".to_string(), 1);
        cache.insert("machado".to_string(), 2);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"Machado".to_string()), Some(1));
        assert_eq!(cache.get(&"machado".to_string()), Some(2));
    }

    #[tokio::test]
    async fn test_memo_round_trip() {
        let memo: Memo<String> = Memo::new(2);
        assert_eq!(memo.get("x").await, None);

        memo.insert("x".to_string(), "valor".to_string()).await;
        assert_eq!(memo.get("x").await, Some("valor".to_string()));
    }
}
